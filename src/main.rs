use clap::Parser;
use std::sync::Arc;

use yangine_scaffold::cli::{Cli, Command};
use yangine_scaffold::commands;
use yangine_scaffold::error::exit_code_for;
use yangine_scaffold::exec::SystemExecutor;
use yangine_scaffold::logging::{self, Logger};
use yangine_scaffold::prompt::TerminalPrompter;

/// Exit status after Ctrl-C, following the shell convention.
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let command = args.command.name();
    logging::init_subscriber(args.verbose, command);
    let log = Arc::new(Logger::new(command));

    if let Err(e) = ctrlc::set_handler(|| {
        tracing::warn!("interrupted; files written so far are left in place");
        std::process::exit(EXIT_INTERRUPTED);
    }) {
        log.debug(&format!("cannot install Ctrl-C handler: {e}"));
    }

    let prompter = TerminalPrompter;
    let result = match args.command {
        Command::Component(opts) => {
            commands::component::run(&args.global, &opts, &log, &prompter).map(drop)
        }
        Command::Copy(opts) => {
            commands::copy::run(&args.global, &opts, &log, &prompter, Arc::new(SystemExecutor))
                .map(drop)
        }
        Command::New(opts) => {
            commands::new::run(&args.global, &opts, &log, &prompter, Arc::new(SystemExecutor))
                .map(drop)
        }
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    };

    if let Err(e) = result {
        log.error(&format!("{e:#}"));
        std::process::exit(exit_code_for(&e));
    }
}
