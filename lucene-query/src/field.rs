use crate::options::RenderOptions;
use std::fmt;

/// Separator between field name and clause body
pub const FIELD_SEPARATOR: char = ':';

/// Optional field scope of a clause.
///
/// An empty name means the clause searches the engine's default field and
/// renders no prefix at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    name: String,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!("{}{}", options.token(&self.name), FIELD_SEPARATOR)
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderOptions::default()))
    }
}
