//! Core logging types: step entries, status, and the [`Log`] trait.

/// Step result for summary reporting.
#[derive(Debug, Clone)]
pub struct StepEntry {
    /// Human-readable step name.
    pub name: String,
    /// Final status of the step.
    pub status: StepStatus,
    /// Optional detail message (e.g., skip reason or error description).
    pub message: Option<String>,
}

/// Status of a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step completed successfully.
    Ok,
    /// Step was explicitly skipped (e.g., `--no-generate`).
    Skipped,
    /// Step encountered an error and the run stopped.
    Failed,
}

impl StepStatus {
    /// Summary marker.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::Skipped => "○",
            Self::Failed => "✗",
        }
    }

    /// ANSI color of the summary line.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::Skipped => "\x1b[33m",
            Self::Failed => "\x1b[31m",
        }
    }
}

/// Abstraction over logging backends.
///
/// Scaffolding operations log through this trait so they can run under the
/// console [`Logger`](super::logger::Logger) or a test double.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Record a step result for the summary.
    fn record_step(&self, name: &str, status: StepStatus, message: Option<&str>);
}
