//! Typed builder for Lucene/Solr query clauses.
//!
//! Clauses are plain values: build one, adjust its modifiers with the fluent
//! setters of [`Clause`], then render it as often as needed.
//!
//! ```
//! use lucene_query::{Clause, Range, Term};
//!
//! let mut term = Term::with_field("quick", "title").unwrap();
//! term.required().boost(2.5).unwrap();
//! assert_eq!(term.to_string(), "+title:quick^2.5");
//!
//! let range = Range::with_field(10, 20, "price");
//! assert_eq!(range.to_string(), "price:[10 TO 20]");
//! ```

pub mod boost;
pub mod clause;
pub mod errors;
pub mod field;
pub mod fuzziness;
pub mod operator;
pub mod options;
pub mod phrase;
pub mod range;
pub mod range_type;
pub mod term;

pub use boost::Boost;
pub use clause::{AnyClause, Clause, ClauseModifiers};
pub use errors::{QueryError, Result};
pub use field::Field;
pub use fuzziness::{Fuzziness, Proximity};
pub use operator::Operator;
pub use options::RenderOptions;
pub use phrase::Phrase;
pub use range::{Range, RangeBound};
pub use range_type::RangeType;
pub use term::Term;
