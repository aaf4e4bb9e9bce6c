//! Command: bootstrap a new project in the workspace.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::{GlobalOpts, NewOpts};
use crate::exec::Executor;
use crate::logging::Logger;
use crate::prompt::{Prompter, custom_or_default, value_or_ask};
use crate::scaffold::bootstrap::{BootstrapOutcome, BootstrapRequest, bootstrap_project};

use super::{CommandSetup, finish};

/// Run the new command against the workspace at the root.
///
/// Every answer is collected and validated before the engine files are
/// touched.
///
/// # Errors
///
/// Returns an error if validation fails, the project is already registered
/// with the engine, or any template, copy or generator step fails.
pub fn run(
    global: &GlobalOpts,
    opts: &NewOpts,
    log: &Arc<Logger>,
    prompter: &dyn Prompter,
    executor: Arc<dyn Executor>,
) -> Result<BootstrapOutcome> {
    let setup = CommandSetup::init(global, log)?;

    let name = value_or_ask(
        prompter,
        opts.name.as_deref(),
        "What project would you like to add?",
        false,
    )?;
    let title = custom_or_default(
        prompter,
        opts.title.as_deref(),
        "Would you like to have another name for project, that is going to be shown in window?",
        name.clone(),
    )?;
    let app_layer = custom_or_default(
        prompter,
        opts.app_layer.as_deref(),
        "Would you like a custom name for Application Layer?",
        BootstrapRequest::default_app_layer(&name),
    )?;
    let game_layer = custom_or_default(
        prompter,
        opts.game_layer.as_deref(),
        "Would you like a custom name for Game Layer?",
        BootstrapRequest::default_game_layer(&name),
    )?;
    let request = BootstrapRequest::new(&name, Some(&title), Some(&app_layer), Some(&game_layer))?;

    let ctx = setup
        .into_context(log, executor)
        .with_generate(opts.generate);
    finish(log, bootstrap_project(&ctx, &request))
}
