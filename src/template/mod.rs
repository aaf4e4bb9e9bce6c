//! Placeholder substitution for template files and paths.
//!
//! Templates reference a closed set of tokens registered in a
//! [`TokenTable`]; see [`render`] for the placeholder syntax.
mod render;
mod tokens;

use serde::Deserialize;

pub use render::{Rendered, TokenRef, UnknownToken, find_tokens, render};
pub use tokens::TokenTable;

/// What to do with a placeholder whose name is not registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTokenPolicy {
    /// Fail the render.
    #[default]
    Reject,
    /// Leave the placeholder verbatim and report it so the caller can warn.
    Warn,
    /// Leave the placeholder verbatim silently.
    Keep,
}
