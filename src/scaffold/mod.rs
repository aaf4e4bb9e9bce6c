//! Scaffolding operations: component generation, project copy and project
//! bootstrap.
//!
//! Each operation takes a validated request and a [`Context`], runs a
//! linear sequence of steps, and records every step in the logger summary.
pub mod bootstrap;
pub mod component;
pub mod copier;
pub mod fs;
pub mod generator;
pub mod layout;
pub mod names;
pub mod premake;

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::exec::Executor;
use crate::logging::{Log, StepStatus};
use crate::template::{self, TokenTable, UnknownTokenPolicy};

/// Shared state for one scaffolding run.
pub struct Context {
    /// Directory the operation works in (workspace or project root).
    pub root: PathBuf,
    /// Loaded configuration.
    pub config: ScaffoldConfig,
    /// Logger for output and step recording.
    pub log: Arc<dyn Log>,
    /// Process runner for the build-file generator.
    pub executor: Arc<dyn Executor>,
    /// Whether to invoke the build-file generator.
    pub generate: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("root", &self.root)
            .field("config", &self.config)
            .field("log", &"<dyn Log>")
            .field("executor", &"<dyn Executor>")
            .field("generate", &self.generate)
            .finish()
    }
}

impl Context {
    /// Create a context that runs the generator.
    #[must_use]
    pub fn new(
        root: PathBuf,
        config: ScaffoldConfig,
        log: Arc<dyn Log>,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            root,
            config,
            log,
            executor,
            generate: true,
        }
    }

    /// Enable or disable the build-file generator step.
    #[must_use]
    pub const fn with_generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    /// Engine directory inside the workspace.
    #[must_use]
    pub fn engine_dir(&self) -> PathBuf {
        self.root.join(&self.config.engine_dir)
    }

    /// Workspace build-configuration file.
    #[must_use]
    pub fn build_file(&self) -> PathBuf {
        self.root.join(&self.config.build_file)
    }
}

/// Run one named step: log it as a stage, then record its outcome.
pub(crate) fn step<T>(ctx: &Context, name: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    ctx.log.stage(name);
    match f() {
        Ok(value) => {
            ctx.log.record_step(name, StepStatus::Ok, None);
            Ok(value)
        }
        Err(e) => {
            ctx.log
                .record_step(name, StepStatus::Failed, Some(&format!("{e:#}")));
            Err(e)
        }
    }
}

/// Read a template file.
///
/// # Errors
///
/// Returns [`ScaffoldError::TemplateMissing`] if `path` is not a file, or an
/// I/O error if it cannot be read as UTF-8 text.
pub fn read_template(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ScaffoldError::TemplateMissing {
            path: path.to_path_buf(),
        }
        .into());
    }
    std::fs::read_to_string(path).with_context(|| format!("reading template {}", path.display()))
}

/// Render `text` with the configured unknown-token policy; `origin` names
/// the text in errors and warnings.
///
/// # Errors
///
/// Returns [`ScaffoldError::Template`] if the text cannot be rendered.
pub fn render_text(ctx: &Context, text: &str, table: &TokenTable, origin: &str) -> Result<String> {
    let policy = ctx.config.unknown_tokens;
    let rendered = template::render(text, table, policy)
        .map_err(ScaffoldError::from)
        .with_context(|| format!("rendering {origin}"))?;
    if policy == UnknownTokenPolicy::Warn {
        for token in &rendered.unknown {
            ctx.log.warn(&format!(
                "{origin}:{}: unknown placeholder '{}' left as is",
                token.line, token.name
            ));
        }
    }
    Ok(rendered.text)
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_helpers::make_context;

    #[test]
    fn step_records_ok_and_failed() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, log, _) = make_context(dir.path());

        step(&ctx, "first", || Ok(())).unwrap();
        let err = step(&ctx, "second", || -> Result<()> { anyhow::bail!("boom") });

        assert!(err.is_err());
        let entries = log.step_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.first().map(|e| e.status), Some(StepStatus::Ok));
        assert_eq!(entries.get(1).map(|e| e.status), Some(StepStatus::Failed));
        assert_eq!(log.failure_count(), 1);
    }

    #[test]
    fn read_template_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_template(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::TemplateMissing { .. })
        ));
    }

    #[test]
    fn render_text_rejects_unknown_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let (ctx, _, _) = make_context(dir.path());
        let table = TokenTable::new().with("class_name", "Health");
        let err = render_text(&ctx, "$class_name by $author", &table, "header").unwrap_err();
        assert!(format!("{err:#}").contains("author"));
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Template(_))
        ));
    }

    #[test]
    fn render_text_keeps_unknown_under_warn() {
        let dir = tempfile::tempdir().unwrap();
        let (mut ctx, _, _) = make_context(dir.path());
        ctx.config.unknown_tokens = UnknownTokenPolicy::Warn;
        let table = TokenTable::new().with("class_name", "Health");
        let out = render_text(&ctx, "$class_name by $author", &table, "header").unwrap();
        assert_eq!(out, "Health by $author");
    }

    #[test]
    fn context_paths_follow_config() {
        let (ctx, _, _) = make_context(Path::new("/ws"));
        assert_eq!(ctx.engine_dir(), PathBuf::from("/ws/Yangine"));
        assert_eq!(ctx.build_file(), PathBuf::from("/ws/premake5.lua"));
        assert!(!ctx.with_generate(false).generate);
    }
}
