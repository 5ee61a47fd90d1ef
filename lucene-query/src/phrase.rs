use crate::clause::{Clause, ClauseModifiers};
use crate::fuzziness::Proximity;
use crate::options::RenderOptions;
use std::fmt;

pub(crate) const QUOTE: char = '"';

/// A quoted multi-word clause such as `body:"quick fox"~3`
#[derive(Clone, Debug, PartialEq)]
pub struct Phrase {
    text: String,
    proximity: Proximity,
    modifiers: ClauseModifiers,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_field(text, "")
    }

    pub fn with_field(text: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            proximity: Proximity::default(),
            modifiers: ClauseModifiers::with_field(field),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn proximity(&self) -> Proximity {
        self.proximity
    }

    /// Allow the words to be up to `distance` positions apart. 0 requires
    /// the exact sequence.
    pub fn set_proximity(&mut self, distance: u32) -> &mut Self {
        self.proximity = Proximity::new(distance);
        self
    }
}

impl Clause for Phrase {
    fn modifiers(&self) -> &ClauseModifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut ClauseModifiers {
        &mut self.modifiers
    }

    fn render_body(&self, options: &RenderOptions) -> String {
        format!(
            "{QUOTE}{}{QUOTE}{}",
            options.quoted(&self.text),
            self.proximity
        )
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
