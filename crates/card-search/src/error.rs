//! Error types for the search crate.
//!
//! Compiling an expression never fails; these errors cover the settings
//! that control compilation.

use thiserror::Error;

/// A specialized Result type for search settings.
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors raised while interpreting search settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// An unrecognized numeric bound policy name.
    #[error("unknown bound policy: {value} (expected \"last\" or \"tightest\")")]
    UnknownBoundPolicy {
        /// The rejected value.
        value: String,
    },
}

impl SearchError {
    /// Creates an unknown bound policy error.
    pub fn unknown_bound_policy(value: impl Into<String>) -> Self {
        SearchError::UnknownBoundPolicy {
            value: value.into(),
        }
    }
}
