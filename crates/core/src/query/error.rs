//! Query error types.

use incomelens_shared::AppError;
use thiserror::Error;

/// Errors that can occur while parsing or running a query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query description could not be turned into a `Query`.
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    /// The sort field does not exist on the dataset's records.
    #[error("Invalid field '{0}'. Please provide a valid field name.")]
    InvalidField(String),

    /// A record value cannot be compared the way the query requires.
    #[error("Field '{field}' holds a {found} value where {expected} was expected")]
    TypeMismatch {
        /// Field being compared.
        field: String,
        /// What the comparison needed.
        expected: &'static str,
        /// What the record actually held.
        found: &'static str,
    },

    /// A date value does not start with a year.
    #[error("Field '{field}' does not start with a year: {value:?}")]
    InvalidDate {
        /// Field being compared.
        field: String,
        /// The offending value.
        value: String,
    },
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        Self::Validation(err.to_string())
    }
}
