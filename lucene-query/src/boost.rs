use crate::errors::{QueryError, Result};
use std::fmt;

/// Weight the engine applies when no boost is given
pub const DEFAULT_BOOST: f64 = 1.0;

/// Relevance weight of a clause, rendered as `^N`.
///
/// The default weight renders as nothing. Any other weight renders in its
/// shortest decimal form, so `2.0` becomes `^2` and `2.10` becomes `^2.1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boost {
    weight: f64,
}

impl Default for Boost {
    fn default() -> Self {
        Self {
            weight: DEFAULT_BOOST,
        }
    }
}

impl Boost {
    /// Fails for NaN, infinities and anything with the sign bit set,
    /// `-0.0` included.
    pub fn new(weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight.is_sign_negative() {
            tracing::debug!("Rejected boost weight {}", weight);
            return Err(QueryError::InvalidBoost(weight));
        }
        Ok(Self { weight })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_default(&self) -> bool {
        self.weight == DEFAULT_BOOST
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            return Ok(());
        }
        // f64's Display already yields the shortest round-trip form without
        // an exponent, a trailing ".0" or trailing zeros.
        write!(f, "^{}", self.weight)
    }
}
