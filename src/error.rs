//! Domain-specific error types for the scaffolding engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Library modules return [`ScaffoldError`] (or [`TemplateError`] for the
//! token engine) while command handlers at the CLI boundary attach context
//! and convert them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ScaffoldError
//! ├── Declined             - user refused to create a missing directory (exit 1)
//! ├── DuplicateProject     - project already registered in premake5.lua (exit 1)
//! ├── InvalidName          - request validation failed
//! ├── TemplateMissing      - a template file could not be found
//! ├── SourceMissing        - a source tree to copy could not be found
//! ├── DestinationExists    - a subtree to copy already exists at the target
//! ├── GeneratorFailed      - the build-file generator exited non-zero
//! └── Template(TemplateError) - malformed or unknown placeholder token
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Process exit status for a refused precondition or a duplicate registration.
pub const EXIT_ABORTED: i32 = 1;

/// Process exit status for every other failure.
pub const EXIT_FAILURE: i32 = 2;

/// Top-level error type for the scaffolding engine.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The user declined to create a directory the operation needs.
    #[error("directory creation declined: {}", .path.display())]
    Declined {
        /// Directory that was not created.
        path: PathBuf,
    },

    /// The project is already registered in the build-configuration file.
    #[error("project '{name}' is already registered in {}", .file.display())]
    DuplicateProject {
        /// Name of the project.
        name: String,
        /// Build-configuration file containing the registration.
        file: PathBuf,
    },

    /// A user-supplied name or path failed validation.
    #[error("invalid {kind} '{value}': {reason}")]
    InvalidName {
        /// What the value names (e.g. `"class name"`).
        kind: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A template file does not exist.
    #[error("template not found: {}", .path.display())]
    TemplateMissing {
        /// Path of the missing template.
        path: PathBuf,
    },

    /// A source directory to copy or walk does not exist.
    #[error("source not found: {}", .path.display())]
    SourceMissing {
        /// Path of the missing source.
        path: PathBuf,
    },

    /// A destination subtree already exists; copies never merge.
    #[error("destination already exists: {}", .path.display())]
    DestinationExists {
        /// Path of the existing destination.
        path: PathBuf,
    },

    /// The external build-file generator could not be run or exited non-zero.
    #[error("build-file generator '{program}' failed (exit {}): {stderr}", fmt_exit_code(.code))]
    GeneratorFailed {
        /// Program that was invoked.
        program: String,
        /// Exit code, if the process produced one.
        code: Option<i32>,
        /// Captured standard error output.
        stderr: String,
    },

    /// A template could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl ScaffoldError {
    /// Exit status the process should terminate with for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Declined { .. } | Self::DuplicateProject { .. } => EXIT_ABORTED,
            _ => EXIT_FAILURE,
        }
    }
}

/// Errors produced while parsing or rendering a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a token outside the registered set.
    #[error("unknown placeholder token '${token}' at line {line}")]
    UnknownToken {
        /// Token name without the `$` sigil.
        token: String,
        /// 1-based line of the placeholder.
        line: usize,
    },

    /// A `${` placeholder is missing its closing brace.
    #[error("unterminated placeholder '${{' at line {line}")]
    Unterminated {
        /// 1-based line of the placeholder.
        line: usize,
    },

    /// A `${}` placeholder has no name or contains invalid characters.
    #[error("malformed placeholder '${{{body}}}' at line {line}")]
    Malformed {
        /// Text between the braces.
        body: String,
        /// 1-based line of the placeholder.
        line: usize,
    },
}

fn fmt_exit_code(code: impl std::borrow::Borrow<Option<i32>>) -> String {
    code.borrow()
        .map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Return the exit code for an error chain produced at the CLI boundary.
///
/// Looks through the chain for a [`ScaffoldError`]; anything else is a
/// generic failure.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScaffoldError>())
        .map_or(EXIT_FAILURE, ScaffoldError::exit_code)
}
