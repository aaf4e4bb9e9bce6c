//! The premake build-configuration file that lists registered projects.
use anyhow::{Context as _, Result};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

use super::fs::ensure_parent_dir;

/// A build-configuration file on disk.
///
/// The file is treated as opaque text: a project counts as registered when
/// the file contains `project "<Name>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    path: PathBuf,
}

impl BuildFile {
    /// Wrap the file at `path`; nothing is read yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Text that marks `name` as registered.
    #[must_use]
    pub fn registration(name: &str) -> String {
        format!("project \"{name}\"")
    }

    /// Whether `name` is registered. A missing file registers nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn contains_project(&self, name: &str) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(text.contains(&Self::registration(name)))
    }

    /// Fail with [`ScaffoldError::DuplicateProject`] if `name` is registered.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::DuplicateProject`] on a hit, or an I/O error.
    pub fn ensure_unregistered(&self, name: &str) -> Result<()> {
        if self.contains_project(name)? {
            return Err(ScaffoldError::DuplicateProject {
                name: name.to_string(),
                file: self.path.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Append `entry` to the end of the file, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, entry: &str) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("appending to {}", self.path.display()))
    }

    /// Replace the whole file with `contents`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_fresh(&self, contents: &str) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}
