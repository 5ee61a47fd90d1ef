//! The rendering contract shared by all clause kinds.
//!
//! Every clause renders as
//!
//! ```text
//! operator? field? body modifier* boost?
//! ```
//!
//! The operator, field and boost are common to all kinds and live in
//! [`ClauseModifiers`]. The body together with any kind-specific modifier
//! (fuzziness, proximity) comes from [`Clause::render_body`].

use crate::boost::Boost;
use crate::errors::Result;
use crate::field::Field;
use crate::operator::Operator;
use crate::options::RenderOptions;
use crate::phrase::Phrase;
use crate::range::Range;
use crate::term::Term;
use std::fmt;

/// Modifiers every clause carries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClauseModifiers {
    pub field: Field,
    pub operator: Operator,
    pub boost: Boost,
}

impl ClauseModifiers {
    pub fn with_field(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name),
            ..Default::default()
        }
    }
}

/// A query fragment that can be scoped, weighted and rendered.
///
/// The fluent setters mutate in place and hand back the same clause, so the
/// last call of `required`/`prohibited`/`optional` wins.
pub trait Clause: fmt::Display {
    fn modifiers(&self) -> &ClauseModifiers;

    fn modifiers_mut(&mut self) -> &mut ClauseModifiers;

    /// Body of the clause including kind-specific suffixes, without operator,
    /// field or boost.
    fn render_body(&self, options: &RenderOptions) -> String;

    fn render_with(&self, options: &RenderOptions) -> String {
        let modifiers = self.modifiers();
        format!(
            "{}{}{}{}",
            modifiers.operator,
            modifiers.field.render(options),
            self.render_body(options),
            modifiers.boost
        )
    }

    fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Scope the clause to a field. An empty name removes the scope.
    fn set_field(&mut self, name: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.modifiers_mut().field = Field::new(name);
        self
    }

    fn clear_field(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.modifiers_mut().field = Field::default();
        self
    }

    fn set_operator(&mut self, operator: Operator) -> &mut Self
    where
        Self: Sized,
    {
        self.modifiers_mut().operator = operator;
        self
    }

    fn required(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.set_operator(Operator::Required)
    }

    fn prohibited(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.set_operator(Operator::Prohibited)
    }

    fn optional(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.set_operator(Operator::Optional)
    }

    /// Weight the clause. Fails for negative or non-finite weights and
    /// leaves the previous boost in place.
    fn boost(&mut self, weight: f64) -> Result<&mut Self>
    where
        Self: Sized,
    {
        self.modifiers_mut().boost = Boost::new(weight)?;
        Ok(self)
    }
}

/// Any clause kind, for callers that keep heterogeneous clauses together
#[derive(Clone, Debug, PartialEq)]
pub enum AnyClause {
    Term(Term),
    Phrase(Phrase),
    Range(Range),
}

impl AnyClause {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyClause::Term(_) => "term",
            AnyClause::Phrase(_) => "phrase",
            AnyClause::Range(_) => "range",
        }
    }
}

impl Clause for AnyClause {
    fn modifiers(&self) -> &ClauseModifiers {
        match self {
            AnyClause::Term(term) => term.modifiers(),
            AnyClause::Phrase(phrase) => phrase.modifiers(),
            AnyClause::Range(range) => range.modifiers(),
        }
    }

    fn modifiers_mut(&mut self) -> &mut ClauseModifiers {
        match self {
            AnyClause::Term(term) => term.modifiers_mut(),
            AnyClause::Phrase(phrase) => phrase.modifiers_mut(),
            AnyClause::Range(range) => range.modifiers_mut(),
        }
    }

    fn render_body(&self, options: &RenderOptions) -> String {
        match self {
            AnyClause::Term(term) => term.render_body(options),
            AnyClause::Phrase(phrase) => phrase.render_body(options),
            AnyClause::Range(range) => range.render_body(options),
        }
    }
}

impl fmt::Display for AnyClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Term> for AnyClause {
    fn from(term: Term) -> Self {
        AnyClause::Term(term)
    }
}

impl From<Phrase> for AnyClause {
    fn from(phrase: Phrase) -> Self {
        AnyClause::Phrase(phrase)
    }
}

impl From<Range> for AnyClause {
    fn from(range: Range) -> Self {
        AnyClause::Range(range)
    }
}
