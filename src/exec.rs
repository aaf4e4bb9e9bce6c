//! External process execution behind an injectable [`Executor`].
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, if the process was not terminated by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Abstraction over process spawning so callers can be tested without
/// running real tools.
#[cfg_attr(test, mockall::automock)]
pub trait Executor: Send + Sync {
    /// Run `program` with `args` in `dir` and return its captured result.
    ///
    /// A non-zero exit is **not** an error here; callers decide how to
    /// interpret [`ExecResult::success`].
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run_in(&self, dir: &Path, program: &str, args: &[String]) -> Result<ExecResult>;

    /// Resolve `program` on `PATH`.
    fn which(&self, program: &str) -> Option<PathBuf>;
}

/// [`Executor`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_in(&self, dir: &Path, program: &str, args: &[String]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .with_context(|| format!("failed to execute: {program} in {}", dir.display()))?;
        Ok(ExecResult::from(output))
    }

    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn run_echo() {
        let dir = std::env::temp_dir();
        #[cfg(windows)]
        let result = SystemExecutor
            .run_in(&dir, "cmd", &["/C".into(), "echo".into(), "hello".into()])
            .unwrap();
        #[cfg(not(windows))]
        let result = SystemExecutor
            .run_in(&dir, "echo", &["hello".to_string()])
            .unwrap();
        assert!(result.success, "echo command should succeed");
        assert_eq!(result.code, Some(0));
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn run_failure_is_not_an_error() {
        let dir = std::env::temp_dir();
        #[cfg(windows)]
        let result = SystemExecutor
            .run_in(&dir, "cmd", &["/C".into(), "exit".into(), "1".into()])
            .unwrap();
        #[cfg(not(windows))]
        let result = SystemExecutor.run_in(&dir, "false", &[]).unwrap();
        assert!(!result.success, "non-zero exit should set success=false");
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let dir = std::env::temp_dir();
        let result = SystemExecutor.run_in(&dir, "this-program-does-not-exist-12345", &[]);
        assert!(result.is_err(), "missing program should fail to spawn");
    }

    #[test]
    fn which_missing_program() {
        assert!(
            SystemExecutor
                .which("this-program-does-not-exist-12345")
                .is_none(),
            "non-existent program should not be found"
        );
    }
}
