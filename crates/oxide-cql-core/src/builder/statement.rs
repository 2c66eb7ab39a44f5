//! The boundary between the builder and the execution layer.

use std::fmt;

/// Rendered query text, ready to be handed to a session for execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleStatement {
    query: String,
}

impl SimpleStatement {
    /// Wraps already rendered query text.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns the query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Consumes the statement and returns the query text.
    #[must_use]
    pub fn into_query(self) -> String {
        self.query
    }
}

impl fmt::Display for SimpleStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// A query that is complete enough to be rendered.
pub trait BuildableQuery {
    /// Renders the query.
    ///
    /// Pretty mode puts every clause on its own line and every selector on
    /// its own indented line. Both modes contain the same tokens in the same
    /// order.
    fn build(&self, pretty: bool) -> SimpleStatement;

    /// Renders the query on a single line.
    fn build_compact(&self) -> SimpleStatement {
        self.build(false)
    }

    /// Renders the query over several indented lines.
    fn build_pretty(&self) -> SimpleStatement {
        self.build(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_statement_accessors() {
        let statement = SimpleStatement::new("SELECT * FROM \"foo\"");
        assert_eq!(statement.query(), "SELECT * FROM \"foo\"");
        assert_eq!(statement.to_string(), "SELECT * FROM \"foo\"");
        assert_eq!(statement.into_query(), "SELECT * FROM \"foo\"");
    }
}
