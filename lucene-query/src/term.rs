use crate::clause::{Clause, ClauseModifiers};
use crate::errors::{QueryError, Result};
use crate::fuzziness::Fuzziness;
use crate::options::RenderOptions;
use std::fmt;

/// A single-token clause such as `title:quick~1^2`
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    text: String,
    fuzziness: Fuzziness,
    modifiers: ClauseModifiers,
}

impl Term {
    /// Build an unscoped term. Surrounding whitespace is trimmed; whitespace
    /// inside the token is rejected, use a [`Phrase`](crate::Phrase) for
    /// multi-word text.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_field(text, "")
    }

    /// Build a term scoped to `field`.
    ///
    /// Only inner whitespace is an error. Empty or all-whitespace text is
    /// passed through as an empty token, so `Term::with_field("", "title")`
    /// renders as `title:`; callers that need a non-empty token check it
    /// themselves.
    pub fn with_field(text: &str, field: impl Into<String>) -> Result<Self> {
        let text = text.trim();
        if text.chars().any(char::is_whitespace) {
            tracing::debug!("Rejected term containing whitespace: {:?}", text);
            return Err(QueryError::InvalidFormat(text.to_string()));
        }
        Ok(Self {
            text: text.to_string(),
            fuzziness: Fuzziness::default(),
            modifiers: ClauseModifiers::with_field(field),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fuzziness(&self) -> Fuzziness {
        self.fuzziness
    }

    /// Match terms within `distance` edits (0, 1 or 2) of this one.
    pub fn fuzzify(&mut self, distance: i64) -> Result<&mut Self> {
        self.fuzziness.set_distance(distance)?;
        Ok(self)
    }

    /// Fuzzify with the largest supported distance
    pub fn fuzzify_default(&mut self) -> &mut Self {
        self.fuzziness = Fuzziness::implicit();
        self
    }
}

impl Clause for Term {
    fn modifiers(&self) -> &ClauseModifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut ClauseModifiers {
        &mut self.modifiers
    }

    fn render_body(&self, options: &RenderOptions) -> String {
        format!("{}{}", options.token(&self.text), self.fuzziness)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
