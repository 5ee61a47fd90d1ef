use crate::errors::{QueryError, Result};
use std::fmt;

/// Largest Damerau-Levenshtein distance the query grammar supports
pub const MAX_DISTANCE: u8 = 2;

/// Distance used when a term is fuzzified without an explicit value
pub const DEFAULT_DISTANCE: u8 = MAX_DISTANCE;

/// Edit-distance tolerance of a term, rendered as `~N`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fuzziness {
    distance: u8,
}

impl Fuzziness {
    pub fn new(distance: i64) -> Result<Self> {
        let mut fuzziness = Self::default();
        fuzziness.set_distance(distance)?;
        Ok(fuzziness)
    }

    /// The distance a bare `~` stands for
    pub fn implicit() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
        }
    }

    /// Set the edit distance. Accepts 0, 1 and 2; 0 means exact match.
    pub fn set_distance(&mut self, distance: i64) -> Result<()> {
        match u8::try_from(distance) {
            Ok(d) if d <= MAX_DISTANCE => {
                self.distance = d;
                Ok(())
            }
            _ => {
                tracing::debug!("Rejected fuzziness distance {}", distance);
                Err(QueryError::FuzzinessOutOfRange(distance))
            }
        }
    }

    pub fn distance(&self) -> u8 {
        self.distance
    }
}

impl fmt::Display for Fuzziness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            0 => Ok(()),
            d => write!(f, "~{}", d),
        }
    }
}

/// Slop of a phrase: how many positions its words may move apart.
///
/// Unlike [`Fuzziness`] the grammar puts no upper bound on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Proximity {
    distance: u32,
}

impl Proximity {
    pub fn new(distance: u32) -> Self {
        Self { distance }
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.distance {
            0 => Ok(()),
            d => write!(f, "~{}", d),
        }
    }
}
