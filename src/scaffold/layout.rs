//! Directory skeleton of a game project.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Directories every new project starts with, relative to the project root.
pub const PROJECT_SKELETON: [&str; 10] = [
    "Assets",
    "Builds",
    "Source/Application",
    "Source/Logic/Components",
    "Source/Logic/Event",
    "Source/Logic/Process",
    "Source/Views",
    "Scripts",
    "Data/ComponentTemplates",
    "Data/ClassTemplates",
];

/// Subtrees the project copier duplicates, with the stage label for each.
pub const COPIED_SUBTREES: [(&str, &str); 4] = [
    ("Source", "Copying source files..."),
    ("Assets", "Copying assets files..."),
    ("Scripts", "Copying scripts files..."),
    ("Data", "Copying data files..."),
];

/// Create the skeleton under `project_root`. Existing directories are left
/// alone.
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub fn create_skeleton(project_root: &Path) -> Result<Vec<PathBuf>> {
    PROJECT_SKELETON
        .iter()
        .map(|rel| {
            let dir = project_root.join(rel);
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
            Ok(dir)
        })
        .collect()
}
