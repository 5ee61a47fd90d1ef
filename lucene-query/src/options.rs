//! Render-time configuration.
//!
//! Clause text is emitted verbatim by default. Escaping of the query
//! grammar's reserved characters is opt-in through [`RenderOptions`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Characters the Lucene classic query parser treats as syntax
pub const SPECIAL_CHARACTERS: &[char] = &[
    '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
    '/',
];

const ESCAPE: char = '\\';

/// Options applied when a clause is rendered to query text
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Backslash-escape reserved characters in terms, field names and range bounds
    pub escape_special_characters: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self {
            escape_special_characters: true,
        }
    }

    /// Prepare bare token text (terms, field names, range bounds)
    pub fn token<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_special_characters {
            escape_token(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Prepare text that is placed between quotation marks
    pub fn quoted<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_special_characters {
            escape_quoted(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Escape every reserved character of the query grammar.
pub fn escape_token(text: &str) -> Cow<'_, str> {
    escape_matching(text, |c| SPECIAL_CHARACTERS.contains(&c))
}

/// Escape only what can terminate a quoted phrase early.
pub fn escape_quoted(text: &str) -> Cow<'_, str> {
    escape_matching(text, |c| c == '"' || c == ESCAPE)
}

fn escape_matching(text: &str, needs_escape: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !text.chars().any(&needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        if needs_escape(c) {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
