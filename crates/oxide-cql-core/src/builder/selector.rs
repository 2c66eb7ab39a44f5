//! Selectors: the expressions listed in a SELECT projection.

use crate::identifier::CqlIdentifier;

/// An element of the SELECT projection.
///
/// `All` is special: adding it replaces the whole projection, and it cannot
/// be aliased. Callers recognize it with [`Selector::is_all`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// All columns (`*`).
    All,
    /// Row count (`count(*)`).
    CountAll,
    /// A single column.
    Column(CqlIdentifier),
    /// Arbitrary text, emitted as-is.
    Raw(String),
}

impl Selector {
    /// Selects all columns, as in `SELECT *`.
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Selects the count of all returned rows, as in `SELECT count(*)`.
    #[must_use]
    pub const fn count_all() -> Self {
        Self::CountAll
    }

    /// Selects a particular column.
    #[must_use]
    pub fn column(name: impl Into<CqlIdentifier>) -> Self {
        Self::Column(name.into())
    }

    /// Selects an arbitrary expression given as raw text.
    ///
    /// The text is appended to the query without any syntax checking or
    /// escaping. Invalid CQL here only fails when the query is executed.
    #[must_use]
    pub fn raw(expression: impl Into<String>) -> Self {
        Self::Raw(expression.into())
    }

    /// Returns `true` for the `*` selector.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns the CQL text of this selector.
    #[must_use]
    pub fn as_cql(&self, pretty: bool) -> String {
        match self {
            Self::All => String::from("*"),
            Self::CountAll => String::from("count(*)"),
            Self::Column(name) => name.as_cql(pretty),
            Self::Raw(expression) => expression.clone(),
        }
    }
}

/// A selector with an optional alias: one entry of the projection list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasedSelector {
    selector: Selector,
    alias: Option<CqlIdentifier>,
}

impl AliasedSelector {
    /// Wraps a selector without an alias.
    #[must_use]
    pub const fn new(selector: Selector) -> Self {
        Self {
            selector,
            alias: None,
        }
    }

    /// Returns the wrapped selector.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Returns the alias, if any.
    #[must_use]
    pub const fn alias(&self) -> Option<&CqlIdentifier> {
        self.alias.as_ref()
    }

    /// Returns a copy with the alias replaced.
    ///
    /// The `*` selector can never be aliased; `Select::alias` rejects that
    /// case before reaching here.
    #[must_use]
    pub fn with_alias(&self, alias: CqlIdentifier) -> Self {
        debug_assert!(!self.selector.is_all(), "the * selector cannot be aliased");
        Self {
            selector: self.selector.clone(),
            alias: Some(alias),
        }
    }

    /// Returns the CQL text: `<selector>[ AS <alias>]`.
    #[must_use]
    pub fn as_cql(&self, pretty: bool) -> String {
        match &self.alias {
            Some(alias) => format!(
                "{} AS {}",
                self.selector.as_cql(pretty),
                alias.as_cql(pretty)
            ),
            None => self.selector.as_cql(pretty),
        }
    }
}
