use crate::errors::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bracket style of a range clause
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeType {
    /// `[lower TO upper]`, bounds included
    #[default]
    Inclusive,
    /// `{lower TO upper}`, bounds excluded
    Exclusive,
}

impl RangeType {
    pub fn opening_bracket(&self) -> char {
        match self {
            RangeType::Inclusive => '[',
            RangeType::Exclusive => '{',
        }
    }

    pub fn closing_bracket(&self) -> char {
        match self {
            RangeType::Inclusive => ']',
            RangeType::Exclusive => '}',
        }
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeType::Inclusive => write!(f, "inclusive"),
            RangeType::Exclusive => write!(f, "exclusive"),
        }
    }
}

impl FromStr for RangeType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inclusive" => Ok(RangeType::Inclusive),
            "exclusive" => Ok(RangeType::Exclusive),
            _ => {
                tracing::debug!("Rejected range type code {:?}", s);
                Err(QueryError::InvalidRangeType(s.to_string()))
            }
        }
    }
}
