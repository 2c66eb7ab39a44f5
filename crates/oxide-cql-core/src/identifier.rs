//! CQL identifiers (keyspace, table, column and alias names).
//!
//! An identifier is stored in its internal, case-exact form. How it appears
//! in query text is decided here, not by the statement renderer:
//!
//! - compact rendering always double-quotes,
//! - pretty rendering leaves the name bare when CQL would read it back
//!   unchanged without quotes.

use std::fmt;

/// Reserved CQL keywords. A name matching one of these must be quoted.
const RESERVED_KEYWORDS: &[&str] = &[
    "add",
    "allow",
    "alter",
    "and",
    "apply",
    "asc",
    "authorize",
    "batch",
    "begin",
    "by",
    "columnfamily",
    "create",
    "delete",
    "desc",
    "describe",
    "drop",
    "entries",
    "execute",
    "from",
    "full",
    "grant",
    "if",
    "in",
    "index",
    "infinity",
    "insert",
    "into",
    "keyspace",
    "limit",
    "modify",
    "nan",
    "norecursive",
    "not",
    "null",
    "of",
    "on",
    "or",
    "order",
    "primary",
    "rename",
    "replace",
    "revoke",
    "schema",
    "select",
    "set",
    "table",
    "to",
    "token",
    "truncate",
    "unlogged",
    "update",
    "use",
    "using",
    "where",
    "with",
];

/// A validated CQL name.
///
/// Two identifiers are equal when their internal forms are equal, so
/// `from_cql("Foo")` and `from_cql("foo")` are the same identifier while
/// `from_cql("\"Foo\"")` is a different one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CqlIdentifier {
    internal: String,
}

impl CqlIdentifier {
    /// Creates an identifier from its CQL form.
    ///
    /// A double-quoted name keeps its case and has `""` unescaped to `"`.
    /// An unquoted name is case-insensitive and is lower-cased.
    #[must_use]
    pub fn from_cql(cql: &str) -> Self {
        let internal = match cql
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Some(quoted) => quoted.replace("\"\"", "\""),
            None => cql.to_lowercase(),
        };
        Self { internal }
    }

    /// Creates an identifier from its internal form, taken verbatim.
    #[must_use]
    pub fn from_internal(internal: impl Into<String>) -> Self {
        Self {
            internal: internal.into(),
        }
    }

    /// Returns the internal, case-exact form.
    #[must_use]
    pub fn as_internal(&self) -> &str {
        &self.internal
    }

    /// Returns the text to embed in a query.
    ///
    /// In pretty mode the quotes are dropped when they are not needed.
    #[must_use]
    pub fn as_cql(&self, pretty: bool) -> String {
        if pretty && !needs_double_quotes(&self.internal) {
            self.internal.clone()
        } else {
            double_quote(&self.internal)
        }
    }
}

impl fmt::Display for CqlIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_cql(false))
    }
}

impl From<&str> for CqlIdentifier {
    fn from(cql: &str) -> Self {
        Self::from_cql(cql)
    }
}

impl From<String> for CqlIdentifier {
    fn from(cql: String) -> Self {
        Self::from_cql(&cql)
    }
}

impl From<&CqlIdentifier> for CqlIdentifier {
    fn from(id: &CqlIdentifier) -> Self {
        id.clone()
    }
}

fn needs_double_quotes(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    if !first.is_ascii_lowercase() {
        return true;
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return true;
    }
    RESERVED_KEYWORDS.contains(&name)
}

fn double_quote(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
