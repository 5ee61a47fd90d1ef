use thiserror::Error;

/// Errors raised while building a clause.
///
/// Every variant is raised at the point of construction or modifier
/// assignment, never at render time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("A term must not contain whitespace: {0:?}")]
    InvalidFormat(String),

    #[error("Invalid range type \"{0}\", expected \"inclusive\" or \"exclusive\"")]
    InvalidRangeType(String),

    #[error("Fuzziness distance {0} is out of range, supported: 0, 1, 2")]
    FuzzinessOutOfRange(i64),

    #[error("Invalid boost {0}: must be a finite, non-negative number")]
    InvalidBoost(f64),

    #[error("Invalid operator \"{0}\", expected \"required\", \"prohibited\" or \"optional\"")]
    InvalidOperator(String),

    #[error("Invalid range bound {0}: must be a finite number")]
    NonFiniteBound(f64),
}

/// Result type alias for clause construction
pub type Result<T> = std::result::Result<T, QueryError>;

impl QueryError {
    /// The input text does not have the shape the clause requires
    pub fn is_format_error(&self) -> bool {
        matches!(self, QueryError::InvalidFormat(_))
    }

    /// A modifier was given a value outside its accepted domain
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            QueryError::InvalidRangeType(_)
                | QueryError::FuzzinessOutOfRange(_)
                | QueryError::InvalidBoost(_)
                | QueryError::InvalidOperator(_)
                | QueryError::NonFiniteBound(_)
        )
    }
}
