//! Structured logger with step summary collection.
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::subscriber::STAGE_TARGET;
use super::types::{Log, StepEntry, StepStatus};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
///
/// The `record_step` method is **not** included because its signature differs
/// from the `fn(&self, &str)` pattern shared by the display methods.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with step summary collection.
///
/// Messages go through [`tracing`]; when the subscriber from
/// [`init_subscriber`](super::subscriber::init_subscriber) is installed they
/// are also written to `$XDG_CACHE_HOME/yangine-scaffold/<command>.log`
/// with timestamps and ANSI codes stripped, regardless of the verbose flag.
#[derive(Debug)]
pub struct Logger {
    steps: Mutex<Vec<StepEntry>>,
    log_file: PathBuf,
}

impl Logger {
    /// Create a new logger.
    ///
    /// Stores the log file path for display in the run summary; this
    /// constructor does not touch the file.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            steps: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_file
    }

    /// Return a clone of all recorded step entries.
    #[must_use]
    pub fn step_entries(&self) -> Vec<StepEntry> {
        self.steps.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record a step result for the summary.
    pub fn record_step(&self, name: &str, status: StepStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.steps.lock() {
            guard.push(StepEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the number of failed steps.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.steps.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|t| t.status == StepStatus::Failed)
                .count()
        })
    }

    /// Print one line per recorded step, a tally and the log file path.
    ///
    /// Nothing is printed when no step ran (e.g. validation failed first).
    pub fn print_summary(&self) {
        let steps = self.step_entries();
        if steps.is_empty() {
            return;
        }

        self.stage("Summary");
        for step in &steps {
            let suffix = step
                .message
                .as_deref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            self.info(&format!(
                "{}{} {}{suffix}\x1b[0m",
                step.status.color(),
                step.status.icon(),
                step.name
            ));
        }

        let count = |status: StepStatus| steps.iter().filter(|s| s.status == status).count();
        self.info(&format!(
            "{} steps: \x1b[32m{} ok\x1b[0m, \x1b[33m{} skipped\x1b[0m, \x1b[31m{} failed\x1b[0m",
            steps.len(),
            count(StepStatus::Ok),
            count(StepStatus::Skipped),
            count(StepStatus::Failed),
        ));
        self.info(&format!("\x1b[2mlog: {}\x1b[0m", self.log_file.display()));
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error);

    fn record_step(&self, name: &str, status: StepStatus, message: Option<&str>) {
        self.record_step(name, status, message);
    }
}
