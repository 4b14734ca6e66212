//! Field identifier errors

use thiserror::Error;

/// Error returned when a string is not a usable field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The identifier has no characters at all.
    #[error("field identifier is empty")]
    Empty,

    /// One of the delimited segments is empty (`"a..b"`, `".a"`, `"a."`).
    #[error("field identifier '{identifier}' has an empty segment at position {position}")]
    EmptySegment { identifier: String, position: usize },
}
