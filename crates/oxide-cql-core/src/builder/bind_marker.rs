//! Bind markers: placeholders whose value is supplied at execution time.

use crate::identifier::CqlIdentifier;

/// A bind marker, rendered as `?` or `:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindMarker {
    /// Positional marker (`?`).
    Anonymous,
    /// Named marker (`:name`).
    Named(CqlIdentifier),
}

impl BindMarker {
    /// Returns the placeholder text.
    ///
    /// The name of a named marker follows the identifier's own quoting rule
    /// for the given mode.
    #[must_use]
    pub fn as_cql(&self, pretty: bool) -> String {
        match self {
            Self::Anonymous => String::from("?"),
            Self::Named(name) => format!(":{}", name.as_cql(pretty)),
        }
    }
}

/// Creates an anonymous bind marker, which appears as `?` in the query.
#[must_use]
pub const fn bind_marker() -> BindMarker {
    BindMarker::Anonymous
}

/// Creates a named bind marker, which appears as `:name` in the query.
#[must_use]
pub fn bind_marker_named(name: impl Into<CqlIdentifier>) -> BindMarker {
    BindMarker::Named(name.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_marker() {
        assert_eq!(bind_marker().as_cql(false), "?");
        assert_eq!(bind_marker().as_cql(true), "?");
    }

    #[test]
    fn test_named_marker() {
        let marker = bind_marker_named("l");
        assert_eq!(marker.as_cql(false), ":\"l\"");
        assert_eq!(marker.as_cql(true), ":l");
    }

    #[test]
    fn test_named_marker_keeps_quoting_when_required() {
        let marker = bind_marker_named("\"Max\"");
        assert_eq!(marker.as_cql(true), ":\"Max\"");
    }
}
