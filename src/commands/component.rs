//! Command: generate a component in a project.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::{ComponentOpts, GlobalOpts};
use crate::error::ScaffoldError;
use crate::exec::SystemExecutor;
use crate::logging::Logger;
use crate::prompt::{Prompter, value_or_ask};
use crate::scaffold::component::{ComponentRequest, GeneratedComponent, generate_component};

use super::{CommandSetup, finish};

/// Run the component command against the project at the root.
///
/// # Errors
///
/// Returns [`ScaffoldError::Declined`] if the user refuses to create the
/// target directory, or any error from request validation and generation.
pub fn run(
    global: &GlobalOpts,
    opts: &ComponentOpts,
    log: &Arc<Logger>,
    prompter: &dyn Prompter,
) -> Result<GeneratedComponent> {
    let setup = CommandSetup::init(global, log)?;

    let class_name = value_or_ask(
        prompter,
        opts.class_name.as_deref(),
        "What component would you like to add?",
        false,
    )?;
    let dir = value_or_ask(
        prompter,
        opts.dir.as_deref(),
        "Which directory should it live in?",
        true,
    )?;
    let mut request = ComponentRequest::new(&class_name, &dir)?;

    let ctx = setup.into_context(log, Arc::new(SystemExecutor));
    let dest = request.destination(&ctx);
    if !dest.is_dir() {
        log.info(&format!("{} does not exist", dest.display()));
        if !(opts.yes || prompter.confirm("Would you like to make it?")?) {
            log.info("Exiting...");
            return Err(ScaffoldError::Declined { path: dest }.into());
        }
        request = request.create_missing(true);
    }

    finish(log, generate_component(&ctx, &request))
}
