//! The closed set of placeholder tokens a template may reference.

/// Ordered map from placeholder name to its replacement value.
///
/// Only names registered here are recognized by the renderer; anything else
/// that looks like a placeholder is reported as unknown. Names are stored
/// without the `$` sigil.
///
/// # Examples
///
/// ```
/// use yangine_scaffold::template::TokenTable;
///
/// let table = TokenTable::new()
///     .with("project_name", "Pong")
///     .with("main", "Main");
///
/// assert_eq!(table.get("project_name"), Some("Pong"));
/// assert_eq!(table.get("author"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<(String, String)>,
}

impl TokenTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `name`, replacing any previous value (builder form).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Register `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Value registered for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered tokens.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tokens are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest registered name that `text` starts with, with its value.
    ///
    /// Used for the bare `$name` form, where the placeholder has no closing
    /// delimiter and may be followed directly by other identifier text
    /// (`$app_layer_header.txt`).
    #[must_use]
    pub fn longest_prefix(&self, text: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .filter(|(n, _)| !n.is_empty() && text.starts_with(n.as_str()))
            .max_by_key(|(n, _)| n.len())
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
