//! File-system helpers shared by the scaffolding operations.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ScaffoldError;

/// How [`copy_tree`] treats a destination directory that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existing {
    /// Refuse to copy into an existing destination.
    Fail,
    /// Copy into it, overwriting files with the same relative path.
    Merge,
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Fail with [`ScaffoldError::SourceMissing`] unless `path` is a directory.
///
/// # Errors
///
/// Returns [`ScaffoldError::SourceMissing`] if `path` is not a directory.
pub fn require_dir(path: &Path) -> Result<(), ScaffoldError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ScaffoldError::SourceMissing {
            path: path.to_path_buf(),
        })
    }
}

/// Relative paths of every regular file under `root`, in a stable order.
///
/// Symlinks are followed so linked template directories are materialised.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if entry.file_type().is_file() {
            let rel = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("relative path of {}", entry.path().display()))?;
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

/// Relative paths of every directory under `root` (excluding `root`).
///
/// # Errors
///
/// Returns an error if the tree cannot be walked.
pub fn list_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if entry.file_type().is_dir() {
            let rel = entry
                .path()
                .strip_prefix(root)
                .with_context(|| format!("relative path of {}", entry.path().display()))?;
            dirs.push(rel.to_path_buf());
        }
    }
    Ok(dirs)
}

/// Recursively copy the directory tree at `src` to `dst`.
///
/// Empty directories are reproduced. `on_file` sees each `(from, to)` pair
/// before it is copied. Returns the destination path of every copied file.
///
/// # Errors
///
/// Returns [`ScaffoldError::SourceMissing`] if `src` is not a directory,
/// [`ScaffoldError::DestinationExists`] if `dst` exists and `existing` is
/// [`Existing::Fail`], or an I/O error from the copy itself.
pub fn copy_tree(
    src: &Path,
    dst: &Path,
    existing: Existing,
    mut on_file: impl FnMut(&Path, &Path),
) -> Result<Vec<PathBuf>> {
    require_dir(src)?;
    if existing == Existing::Fail && dst.exists() {
        return Err(ScaffoldError::DestinationExists {
            path: dst.to_path_buf(),
        }
        .into());
    }

    std::fs::create_dir_all(dst)
        .with_context(|| format!("creating directory {}", dst.display()))?;
    for dir in list_dirs(src)? {
        let target = dst.join(&dir);
        std::fs::create_dir_all(&target)
            .with_context(|| format!("creating directory {}", target.display()))?;
    }

    let mut copied = Vec::new();
    for file in list_files(src)? {
        let from = src.join(&file);
        let to = dst.join(&file);
        on_file(&from, &to);
        std::fs::copy(&from, &to)
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
        copied.push(to);
    }
    Ok(copied)
}
