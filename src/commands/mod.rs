//! Top-level subcommand orchestration.
pub mod component;
pub mod copy;
pub mod new;
pub mod version;

use anyhow::{Context as _, Result, bail};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::config::ScaffoldConfig;
use crate::exec::Executor;
use crate::logging::{Log, Logger};
use crate::scaffold::Context;

/// Shared state produced by the common command setup sequence.
///
/// Resolves the working root and loads configuration so that each command
/// does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Canonical working root.
    pub root: PathBuf,
    /// Loaded configuration (defaults when no file exists).
    pub config: ScaffoldConfig,
}

impl CommandSetup {
    /// Resolve the root, load the configuration and log any warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist or the configuration file
    /// cannot be parsed.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let root = resolve_root(global)?;
        log.debug(&format!("root: {}", root.display()));

        let config = ScaffoldConfig::load(&root, global.config.as_deref())?;

        let warnings = config.validate();
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!("  [{}]: {}", warning.item, warning.message));
            }
        }

        Ok(Self { root, config })
    }

    /// Turn the setup into a scaffolding [`Context`].
    #[must_use]
    pub fn into_context(self, log: &Arc<Logger>, executor: Arc<dyn Executor>) -> Context {
        Context::new(
            self.root,
            self.config,
            Arc::clone(log) as Arc<dyn Log>,
            executor,
        )
    }
}

/// Resolve the working root from `--root` or the current directory.
///
/// # Errors
///
/// Returns an error if the directory does not exist.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    let root = match global.root {
        Some(ref root) => root.clone(),
        None => std::env::current_dir().context("reading current directory")?,
    };
    if !root.is_dir() {
        bail!("root directory not found: {}", root.display());
    }
    dunce::canonicalize(&root).with_context(|| format!("resolving {}", root.display()))
}

/// Print the step summary and hand back the command result.
///
/// # Errors
///
/// Returns `result`'s error unchanged.
pub fn finish<T>(log: &Logger, result: Result<T>) -> Result<T> {
    log.print_summary();
    result
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    #[test]
    fn resolve_root_uses_flag() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOpts {
            root: Some(dir.path().to_path_buf()),
            config: None,
        };
        let root = resolve_root(&global).unwrap();
        assert_eq!(root, dunce::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn resolve_root_rejects_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOpts {
            root: Some(dir.path().join("missing")),
            config: None,
        };
        assert!(resolve_root(&global).is_err());
    }

    #[test]
    fn init_loads_config_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "engine_dir = \"Engine\"\n").unwrap();
        let global = GlobalOpts {
            root: Some(dir.path().to_path_buf()),
            config: None,
        };
        let setup = CommandSetup::init(&global, &Logger::new("test")).unwrap();
        assert_eq!(setup.config.engine_dir, PathBuf::from("Engine"));
    }

    #[test]
    fn init_fails_on_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "engine_dir = [").unwrap();
        let global = GlobalOpts {
            root: Some(dir.path().to_path_buf()),
            config: None,
        };
        assert!(CommandSetup::init(&global, &Logger::new("test")).is_err());
    }
}
