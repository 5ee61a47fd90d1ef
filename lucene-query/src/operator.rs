use crate::errors::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boolean requirement of a clause within a query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// No prefix: the clause may match
    #[default]
    Optional,
    /// `+`: the clause must match
    Required,
    /// `-`: the clause must not match
    Prohibited,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Optional => "",
            Operator::Required => "+",
            Operator::Prohibited => "-",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "optional" | "should" => Ok(Operator::Optional),
            "+" | "required" | "must" => Ok(Operator::Required),
            "-" | "prohibited" | "must_not" => Ok(Operator::Prohibited),
            _ => Err(QueryError::InvalidOperator(s.to_string())),
        }
    }
}
