//! Error types for the query builder.

use thiserror::Error;

/// Errors raised by builder operations that validate their input.
///
/// Both variants signal a programming error at the call site. They are
/// returned before any new statement is produced, so the statement the
/// operation was called on stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryBuilderError {
    /// An argument was rejected, e.g. a non-positive LIMIT or `*` passed to
    /// a batch of selectors.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed in the statement's current shape, e.g.
    /// aliasing when no selector has been added yet.
    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl QueryBuilderError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState(message.into())
    }
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, QueryBuilderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueryBuilderError::invalid_argument("Limit must be strictly positive").to_string(),
            "invalid argument: Limit must be strictly positive"
        );
        assert_eq!(
            QueryBuilderError::illegal_state("Can't alias the * selector").to_string(),
            "illegal state: Can't alias the * selector"
        );
    }
}
