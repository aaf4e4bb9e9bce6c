//! Validation of user-supplied names and relative paths.
use std::path::PathBuf;

use crate::error::ScaffoldError;

const fn invalid<'a>(kind: &'static str, value: &'a str, reason: &'static str) -> InvalidName<'a> {
    InvalidName {
        kind,
        value,
        reason,
    }
}

struct InvalidName<'a> {
    kind: &'static str,
    value: &'a str,
    reason: &'static str,
}

impl From<InvalidName<'_>> for ScaffoldError {
    fn from(e: InvalidName<'_>) -> Self {
        Self::InvalidName {
            kind: e.kind,
            value: e.value.to_string(),
            reason: e.reason,
        }
    }
}

/// Validate a C++-style identifier (`[A-Za-z_][A-Za-z0-9_]*`).
///
/// Used for class names, new project names and layer names, all of which
/// end up as identifiers or premake project names.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] describing the first problem found.
pub fn identifier(kind: &'static str, value: &str) -> Result<String, ScaffoldError> {
    let Some(first) = value.chars().next() else {
        return Err(invalid(kind, value, "must not be empty").into());
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(invalid(kind, value, "must start with a letter or underscore").into());
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            kind,
            value,
            "may only contain letters, digits and underscores",
        )
        .into());
    }
    Ok(value.to_string())
}

/// Validate the name of an existing directory in the workspace: a single,
/// non-empty path component.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] describing the first problem found.
pub fn directory_name(kind: &'static str, value: &str) -> Result<String, ScaffoldError> {
    if value.is_empty() {
        return Err(invalid(kind, value, "must not be empty").into());
    }
    if value == "." || value == ".." {
        return Err(invalid(kind, value, "must name a directory, not a relative reference").into());
    }
    if value.contains(['/', '\\']) {
        return Err(invalid(kind, value, "must be a single directory name").into());
    }
    Ok(value.to_string())
}

/// Validate the name of a project about to be registered in the build file:
/// a [`directory_name`] that can also sit inside `project "<Name>"` and a
/// rendered template.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] describing the first problem found.
pub fn registered_name(kind: &'static str, value: &str) -> Result<String, ScaffoldError> {
    let name = directory_name(kind, value)?;
    if name.chars().any(|c| c.is_control() || c == '"' || c == '$') {
        return Err(invalid(
            kind,
            value,
            "must not contain control characters, double quotes or '$'",
        )
        .into());
    }
    Ok(name)
}

/// Validate free text shown to users (e.g. the window title).
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] if the text is empty or contains
/// control characters or double quotes.
pub fn display_text(kind: &'static str, value: &str) -> Result<String, ScaffoldError> {
    if value.is_empty() {
        return Err(invalid(kind, value, "must not be empty").into());
    }
    if value.chars().any(|c| c.is_control() || c == '"') {
        return Err(invalid(
            kind,
            value,
            "must not contain control characters or double quotes",
        )
        .into());
    }
    Ok(value.to_string())
}

/// Parse a relative directory that must stay under the directory it is
/// joined to.
///
/// Both `/` and `\` separate components; empty and `.` components are
/// dropped, so `""` is the base directory itself.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidName`] for absolute paths, drive prefixes
/// and `..` components.
pub fn relative_dir(kind: &'static str, value: &str) -> Result<PathBuf, ScaffoldError> {
    if value.starts_with(['/', '\\']) {
        return Err(invalid(kind, value, "must be relative").into());
    }
    let mut path = PathBuf::new();
    for part in value.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => return Err(invalid(kind, value, "must not contain '..'").into()),
            p if p.contains(':') => {
                return Err(invalid(kind, value, "must not contain a drive prefix").into());
            }
            p => path.push(p),
        }
    }
    Ok(path)
}
