//! Typed SPARQL terms for values bound into a query.
//!
//! User input only ever reaches query text through a [`Term`], which
//! either validates (IRIs) or escapes (literals) it.

use std::fmt;

use crate::error::QueryError;

/// Characters that may not appear inside a SPARQL `IRIREF`.
const IRI_FORBIDDEN: &[char] = &['<', '>', '"', '{', '}', '|', '^', '`', '\\'];

/// Characters with special meaning in a SPARQL (XPath) regular expression.
const REGEX_META: &[char] = &[
    '\\', '|', '.', '-', '^', '?', '*', '+', '{', '}', '(', ')', '[', ']', '$',
];

/// A value that can be bound to a query variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A validated absolute IRI, rendered as `<...>`.
    Iri(String),
    /// A plain string, rendered as an escaped `"..."` literal.
    Literal(String),
}

impl Term {
    /// Validate `raw` as an entity identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] if `raw` is empty, contains
    /// whitespace, control characters or any character forbidden in an
    /// `IRIREF`, or is not an absolute IRI.
    pub fn iri(raw: &str) -> Result<Self, QueryError> {
        if raw.is_empty() {
            return Err(QueryError::InvalidParameter("identifier is empty".into()));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| c.is_whitespace() || c.is_control() || IRI_FORBIDDEN.contains(c))
        {
            return Err(QueryError::InvalidParameter(format!(
                "identifier contains forbidden character {bad:?}"
            )));
        }
        url::Url::parse(raw).map_err(|e| {
            QueryError::InvalidParameter(format!("identifier is not an absolute IRI: {e}"))
        })?;
        Ok(Self::Iri(raw.to_owned()))
    }

    /// Build a regex literal that matches `text` as a plain substring.
    ///
    /// Surrounding whitespace is trimmed and regex metacharacters are
    /// escaped before the literal itself is escaped on rendering.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] if `text` is blank.
    pub fn substring_pattern(text: &str) -> Result<Self, QueryError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(QueryError::InvalidParameter("search text is empty".into()));
        }
        Ok(Self::Literal(escape_regex(trimmed)))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Literal(text) => write!(f, "\"{}\"", escape_literal(text)),
        }
    }
}

/// Escape `text` for use inside a double-quoted SPARQL string literal.
pub fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Escape regex metacharacters so `text` matches literally.
pub fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if REGEX_META.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
