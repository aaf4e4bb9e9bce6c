//! Invocation of the external build-file generator (premake).
use anyhow::Result;
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::ScaffoldError;
use crate::exec::{ExecResult, Executor};
use crate::logging::StepStatus;

use super::Context;

/// Stage label of the generator step.
pub const STEP_NAME: &str = "Generating Visual Studio project files...";

/// Work out what to run: a local executable in `dir` wins over `PATH`.
///
/// # Errors
///
/// Returns [`ScaffoldError::GeneratorFailed`] if neither is available.
pub fn resolve_program(
    config: &GeneratorConfig,
    executor: &dyn Executor,
    dir: &Path,
) -> Result<String, ScaffoldError> {
    let local = dir.join(&config.executable);
    if local.is_file() {
        return Ok(local.display().to_string());
    }
    executor
        .which(&config.program)
        .map(|p| p.display().to_string())
        .ok_or_else(|| ScaffoldError::GeneratorFailed {
            program: config.program.clone(),
            code: None,
            stderr: format!("not found in {} or on PATH", dir.display()),
        })
}

/// Run the generator in `dir` and check its exit status.
///
/// # Errors
///
/// Returns [`ScaffoldError::GeneratorFailed`] if the program cannot be found
/// or spawned, or exits non-zero.
pub fn run_generator(
    config: &GeneratorConfig,
    executor: &dyn Executor,
    dir: &Path,
) -> Result<ExecResult, ScaffoldError> {
    let program = resolve_program(config, executor, dir)?;
    let result = executor
        .run_in(dir, &program, &config.args)
        .map_err(|e| ScaffoldError::GeneratorFailed {
            program: program.clone(),
            code: None,
            stderr: format!("{e:#}"),
        })?;
    if !result.success {
        return Err(ScaffoldError::GeneratorFailed {
            program,
            code: result.code,
            stderr: result.stderr.trim().to_string(),
        });
    }
    Ok(result)
}

/// Generator step of `copy` and `new`: runs in the context root, or is
/// recorded as skipped when generation is disabled.
///
/// # Errors
///
/// Returns an error if the generator fails.
pub fn generate(ctx: &Context) -> Result<()> {
    if !ctx.generate {
        ctx.log.stage(STEP_NAME);
        ctx.log.info("skipped (--no-generate)");
        ctx.log
            .record_step(STEP_NAME, StepStatus::Skipped, Some("--no-generate"));
        return Ok(());
    }
    super::step(ctx, STEP_NAME, || {
        let result = run_generator(&ctx.config.generator, ctx.executor.as_ref(), &ctx.root)?;
        for line in result.stdout.lines().filter(|l| !l.trim().is_empty()) {
            ctx.log.debug(line);
        }
        Ok(())
    })
}
