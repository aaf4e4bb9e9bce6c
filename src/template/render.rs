//! Placeholder scanning and rendering.
//!
//! Two placeholder forms are recognized:
//!
//! - `${name}`: explicit delimiters; `name` must be an identifier.
//! - `$name`: bare; resolves to the longest registered name that follows
//!   the sigil, so it can sit directly against other identifier text.
//!
//! `$$` renders a single literal `$`, and a `$` followed by anything other
//! than a letter, `_`, `$` or `{` is plain text.
use crate::error::TemplateError;

use super::UnknownTokenPolicy;
use super::tokens::TokenTable;

/// A placeholder that named a token outside the registered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    /// Token name without the sigil or braces.
    pub name: String,
    /// 1-based line the placeholder starts on.
    pub line: usize,
}

/// Output of [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Rendered text.
    pub text: String,
    /// Unknown placeholders left verbatim in [`text`](Self::text)
    /// (always empty under [`UnknownTokenPolicy::Reject`]).
    pub unknown: Vec<UnknownToken>,
}

/// A placeholder occurrence found by [`find_tokens`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRef {
    /// Token name without the sigil or braces.
    pub name: String,
    /// 1-based line the placeholder starts on.
    pub line: usize,
    /// Whether the name is registered in the table that was scanned with.
    pub known: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Dollar,
    Known { value: &'a str, name: &'a str, line: usize },
    Unknown { raw: &'a str, name: &'a str, line: usize },
}

const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_valid_name(name: &str) -> bool {
    name.starts_with(is_ident_start) && name.chars().all(is_ident_char)
}

/// Split `text` into literal text and placeholders resolved against `table`.
fn scan<'a>(text: &'a str, table: &'a TokenTable) -> Result<Vec<Piece<'a>>, TemplateError> {
    let mut pieces = Vec::new();
    let mut rest = text;
    let mut line = 1;

    while let Some(pos) = rest.find('$') {
        let (before, from_sigil) = rest.split_at(pos);
        line += before.matches('\n').count();
        let after = from_sigil.get('$'.len_utf8()..).unwrap_or_default();

        if let Some(tail) = after.strip_prefix('$') {
            push_text(&mut pieces, before);
            pieces.push(Piece::Dollar);
            rest = tail;
        } else if let Some(inner) = after.strip_prefix('{') {
            let Some(close) = inner.find('}') else {
                return Err(TemplateError::Unterminated { line });
            };
            let (name, tail) = inner.split_at(close);
            if !is_valid_name(name) {
                return Err(TemplateError::Malformed {
                    body: name.to_string(),
                    line,
                });
            }
            push_text(&mut pieces, before);
            let raw_len = '$'.len_utf8() + '{'.len_utf8() + close + '}'.len_utf8();
            let raw = from_sigil.get(..raw_len).unwrap_or(from_sigil);
            pieces.push(resolve(table, name, raw, line));
            rest = tail.get('}'.len_utf8()..).unwrap_or_default();
        } else if after.starts_with(is_ident_start) {
            push_text(&mut pieces, before);
            let name_len = table.longest_prefix(after).map_or_else(
                || after.find(|c| !is_ident_char(c)).unwrap_or(after.len()),
                |(name, _)| name.len(),
            );
            let (name, tail) = after.split_at(name_len);
            let raw = from_sigil
                .get(..'$'.len_utf8() + name_len)
                .unwrap_or(from_sigil);
            pieces.push(resolve(table, name, raw, line));
            rest = tail;
        } else {
            // Lone `$`: keep it as text.
            let (lit, tail) = rest.split_at(pos + '$'.len_utf8());
            push_text(&mut pieces, lit);
            rest = tail;
        }
    }
    push_text(&mut pieces, rest);
    Ok(pieces)
}

fn push_text<'a>(pieces: &mut Vec<Piece<'a>>, text: &'a str) {
    if !text.is_empty() {
        pieces.push(Piece::Text(text));
    }
}

fn resolve<'a>(table: &'a TokenTable, name: &'a str, raw: &'a str, line: usize) -> Piece<'a> {
    table.get(name).map_or(Piece::Unknown { raw, name, line }, |value| Piece::Known {
        value,
        name,
        line,
    })
}

/// Render `text`, replacing every registered placeholder with its value.
///
/// # Errors
///
/// Returns [`TemplateError::Unterminated`] or [`TemplateError::Malformed`]
/// for a broken `${...}` placeholder, and [`TemplateError::UnknownToken`]
/// for the first unregistered placeholder when `policy` is
/// [`UnknownTokenPolicy::Reject`].
///
/// # Examples
///
/// ```
/// use yangine_scaffold::template::{TokenTable, UnknownTokenPolicy, render};
///
/// let table = TokenTable::new().with("class_name", "Health");
/// let out = render("class $class_name : public ${class_name}Base", &table, UnknownTokenPolicy::Reject).unwrap();
/// assert_eq!(out.text, "class Health : public HealthBase");
/// ```
pub fn render(
    text: &str,
    table: &TokenTable,
    policy: UnknownTokenPolicy,
) -> Result<Rendered, TemplateError> {
    let mut out = String::with_capacity(text.len());
    let mut unknown = Vec::new();

    for piece in scan(text, table)? {
        match piece {
            Piece::Text(t) => out.push_str(t),
            Piece::Dollar => out.push('$'),
            Piece::Known { value, .. } => out.push_str(value),
            Piece::Unknown { raw, name, line } => {
                if policy == UnknownTokenPolicy::Reject {
                    return Err(TemplateError::UnknownToken {
                        token: name.to_string(),
                        line,
                    });
                }
                out.push_str(raw);
                unknown.push(UnknownToken {
                    name: name.to_string(),
                    line,
                });
            }
        }
    }

    Ok(Rendered { text: out, unknown })
}

/// List every placeholder in `text`, marking which are registered in `table`.
///
/// # Errors
///
/// Returns an error for a broken `${...}` placeholder.
pub fn find_tokens(text: &str, table: &TokenTable) -> Result<Vec<TokenRef>, TemplateError> {
    Ok(scan(text, table)?
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Known { name, line, .. } => Some(TokenRef {
                name: name.to_string(),
                line,
                known: true,
            }),
            Piece::Unknown { name, line, .. } => Some(TokenRef {
                name: name.to_string(),
                line,
                known: false,
            }),
            Piece::Text(_) | Piece::Dollar => None,
        })
        .collect())
}
