//! Command: copy a project in the workspace.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::{CopyOpts, GlobalOpts};
use crate::exec::Executor;
use crate::logging::Logger;
use crate::prompt::{Prompter, value_or_ask};
use crate::scaffold::copier::{CopyOutcome, CopyRequest, copy_project};

use super::{CommandSetup, finish};

/// Run the copy command against the workspace at the root.
///
/// # Errors
///
/// Returns an error if validation fails, the new project is already
/// registered, or any copy, template or generator step fails.
pub fn run(
    global: &GlobalOpts,
    opts: &CopyOpts,
    log: &Arc<Logger>,
    prompter: &dyn Prompter,
    executor: Arc<dyn Executor>,
) -> Result<CopyOutcome> {
    let setup = CommandSetup::init(global, log)?;

    let source = value_or_ask(
        prompter,
        opts.source.as_deref(),
        "What project would you like to copy?",
        false,
    )?;
    let name = value_or_ask(
        prompter,
        opts.name.as_deref(),
        "Enter the name of a new project?",
        false,
    )?;
    let request = CopyRequest::new(&source, &name)?;

    let ctx = setup
        .into_context(log, executor)
        .with_generate(opts.generate);
    finish(log, copy_project(&ctx, &request))
}
