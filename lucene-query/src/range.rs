use crate::clause::{Clause, ClauseModifiers};
use crate::errors::{QueryError, Result};
use crate::options::RenderOptions;
use crate::phrase::QUOTE;
use crate::range_type::RangeType;
use std::fmt;

/// Keyword between the two bounds of a range
pub const RANGE_SEPARATOR: &str = " TO ";

/// Sentinel the grammar uses for an open bound
pub const UNBOUNDED: &str = "*";

/// One end of a range.
///
/// A value containing whitespace renders inside quotes, `["New York" TO *]`,
/// so the parser still sees a single bound on each side of `TO`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RangeBound {
    #[default]
    Unbounded,
    Value(String),
}

impl RangeBound {
    fn render(&self, options: &RenderOptions) -> String {
        match self {
            RangeBound::Unbounded => UNBOUNDED.to_string(),
            RangeBound::Value(value) if value.chars().any(char::is_whitespace) => {
                format!("{QUOTE}{}{QUOTE}", options.quoted(value))
            }
            RangeBound::Value(value) => options.token(value).into_owned(),
        }
    }
}

impl From<&str> for RangeBound {
    fn from(value: &str) -> Self {
        match value.trim() {
            UNBOUNDED | "" => RangeBound::Unbounded,
            v => RangeBound::Value(v.to_string()),
        }
    }
}

impl From<String> for RangeBound {
    fn from(value: String) -> Self {
        RangeBound::from(value.as_str())
    }
}

impl From<i64> for RangeBound {
    fn from(value: i64) -> Self {
        RangeBound::Value(value.to_string())
    }
}

impl From<i32> for RangeBound {
    fn from(value: i32) -> Self {
        RangeBound::Value(value.to_string())
    }
}

impl From<u64> for RangeBound {
    fn from(value: u64) -> Self {
        RangeBound::Value(value.to_string())
    }
}

impl TryFrom<f64> for RangeBound {
    type Error = QueryError;

    /// NaN and infinities have no literal the parser reads as a number
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            tracing::debug!("Rejected range bound {}", value);
            return Err(QueryError::NonFiniteBound(value));
        }
        Ok(RangeBound::Value(value.to_string()))
    }
}

impl<T: Into<RangeBound>> From<Option<T>> for RangeBound {
    fn from(value: Option<T>) -> Self {
        value.map_or(RangeBound::Unbounded, Into::into)
    }
}

/// A bounded clause such as `price:[10 TO 20]`.
///
/// Bound order is not checked; the engine decides what an inverted range
/// means.
#[derive(Clone, Debug, PartialEq)]
pub struct Range {
    lower: RangeBound,
    upper: RangeBound,
    range_type: RangeType,
    modifiers: ClauseModifiers,
}

impl Range {
    pub fn new(lower: impl Into<RangeBound>, upper: impl Into<RangeBound>) -> Self {
        Self::with_field(lower, upper, "")
    }

    pub fn with_field(
        lower: impl Into<RangeBound>,
        upper: impl Into<RangeBound>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
            range_type: RangeType::default(),
            modifiers: ClauseModifiers::with_field(field),
        }
    }

    pub fn lower(&self) -> &RangeBound {
        &self.lower
    }

    pub fn upper(&self) -> &RangeBound {
        &self.upper
    }

    pub fn range_type(&self) -> RangeType {
        self.range_type
    }

    pub fn set_range_type(&mut self, range_type: RangeType) -> &mut Self {
        self.range_type = range_type;
        self
    }

    pub fn inclusive(&mut self) -> &mut Self {
        self.set_range_type(RangeType::Inclusive)
    }

    pub fn exclusive(&mut self) -> &mut Self {
        self.set_range_type(RangeType::Exclusive)
    }
}

impl Clause for Range {
    fn modifiers(&self) -> &ClauseModifiers {
        &self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut ClauseModifiers {
        &mut self.modifiers
    }

    fn render_body(&self, options: &RenderOptions) -> String {
        format!(
            "{}{}{}{}{}",
            self.range_type.opening_bracket(),
            self.lower.render(options),
            RANGE_SEPARATOR,
            self.upper.render(options),
            self.range_type.closing_bracket()
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
