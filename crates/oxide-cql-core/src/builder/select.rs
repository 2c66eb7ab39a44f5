//! Immutable SELECT statement builder using the typestate pattern.
//!
//! Every operation borrows the statement and returns a new one, so a common
//! prefix can be shared and branched into several queries. Clauses that only
//! make sense once a selector exists (LIMIT, ALLOW FILTERING, `build`) are
//! only available on [`Select<HasSelectors>`].

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroU32;

use tracing::debug;

use super::bind_marker::BindMarker;
use super::renderer::Renderer;
use super::selector::{AliasedSelector, Selector};
use super::statement::{BuildableQuery, SimpleStatement};
use crate::error::{QueryBuilderError, Result};
use crate::identifier::CqlIdentifier;

// Typestate markers (zero-sized types)

/// Marker: no selector has been added yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSelectors;
/// Marker: at least one projection operation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasSelectors;

/// A SELECT statement that does not have any selector yet.
pub type SelectFrom = Select<NoSelectors>;

/// The value of a LIMIT clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Limit {
    /// A literal row count.
    Literal(NonZeroU32),
    /// A value bound at execution time.
    Marker(BindMarker),
}

impl Limit {
    /// Returns the CQL text of the value.
    #[must_use]
    pub fn as_cql(&self, pretty: bool) -> String {
        match self {
            Self::Literal(n) => n.to_string(),
            Self::Marker(marker) => marker.as_cql(pretty),
        }
    }
}

/// Starts a SELECT query for an unqualified table.
#[must_use]
pub fn select_from(table: impl Into<CqlIdentifier>) -> SelectFrom {
    SelectFrom::start(None, table.into())
}

/// Starts a SELECT query for a table qualified by its keyspace.
#[must_use]
pub fn select_from_qualified(
    keyspace: impl Into<CqlIdentifier>,
    table: impl Into<CqlIdentifier>,
) -> SelectFrom {
    SelectFrom::start(Some(keyspace.into()), table.into())
}

/// An immutable SELECT statement.
///
/// The projection is always in one of three shapes: empty, exactly `*`, or
/// a non-empty list without `*`. Adding `*` replaces whatever was there;
/// adding anything else after a lone `*` drops the `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select<State = HasSelectors> {
    keyspace: Option<CqlIdentifier>,
    table: CqlIdentifier,
    json: bool,
    distinct: bool,
    selectors: Vec<AliasedSelector>,
    limit: Option<Limit>,
    allow_filtering: bool,
    _state: PhantomData<State>,
}

impl Select<NoSelectors> {
    const fn start(keyspace: Option<CqlIdentifier>, table: CqlIdentifier) -> Self {
        Self {
            keyspace,
            table,
            json: false,
            distinct: false,
            selectors: vec![],
            limit: None,
            allow_filtering: false,
            _state: PhantomData,
        }
    }
}

// Available in every stage
impl<State> Select<State> {
    /// Returns the keyspace, if the table is qualified.
    #[must_use]
    pub const fn keyspace(&self) -> Option<&CqlIdentifier> {
        self.keyspace.as_ref()
    }

    /// Returns the target table.
    #[must_use]
    pub const fn table(&self) -> &CqlIdentifier {
        &self.table
    }

    /// Returns `true` if `SELECT JSON` was requested.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Returns `true` if `SELECT DISTINCT` was requested.
    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Returns the projection list, in insertion order.
    #[must_use]
    pub fn projection(&self) -> &[AliasedSelector] {
        &self.selectors
    }

    /// Returns the LIMIT value, if one was set.
    #[must_use]
    pub const fn limit_value(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }

    /// Returns `true` if ALLOW FILTERING was requested.
    #[must_use]
    pub const fn is_filtering_allowed(&self) -> bool {
        self.allow_filtering
    }

    /// Makes this a `SELECT JSON` query. Idempotent.
    #[must_use]
    pub fn json(&self) -> Self
    where
        State: Clone,
    {
        Self {
            json: true,
            ..self.clone()
        }
    }

    /// Makes this a `SELECT DISTINCT` query. Idempotent.
    #[must_use]
    pub fn distinct(&self) -> Self
    where
        State: Clone,
    {
        Self {
            distinct: true,
            ..self.clone()
        }
    }

    /// Adds a selector.
    ///
    /// [`Selector::All`] replaces every previous selector. Any other selector
    /// added after a lone `*` replaces it; otherwise it is appended.
    #[must_use]
    pub fn selector(&self, selector: Selector) -> Select<HasSelectors> {
        let selectors = if selector.is_all() {
            vec![AliasedSelector::new(Selector::All)]
        } else if self.is_select_all() {
            vec![AliasedSelector::new(selector)]
        } else {
            let mut selectors = self.selectors.clone();
            selectors.push(AliasedSelector::new(selector));
            selectors
        };
        self.with_selectors(selectors)
    }

    /// Adds several selectors at once.
    ///
    /// A lone `*` selected earlier is dropped. An empty batch is accepted and
    /// leaves the projection as it was.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidArgument`] if the batch contains
    /// [`Selector::All`]; `*` can only be added on its own.
    pub fn selectors<I>(&self, selectors: I) -> Result<Select<HasSelectors>>
    where
        I: IntoIterator<Item = Selector>,
    {
        let mut new_selectors = if self.is_select_all() {
            vec![]
        } else {
            self.selectors.clone()
        };
        for selector in selectors {
            if selector.is_all() {
                debug!(table = %self.table, "Rejected * inside a selector batch");
                return Err(QueryBuilderError::invalid_argument(
                    "Can't pass the * selector to selectors()",
                ));
            }
            new_selectors.push(AliasedSelector::new(selector));
        }
        Ok(self.with_selectors(new_selectors))
    }

    /// Selects all columns, as in `SELECT *`.
    #[must_use]
    pub fn all(&self) -> Select<HasSelectors> {
        self.selector(Selector::All)
    }

    /// Selects the count of all returned rows, as in `SELECT count(*)`.
    #[must_use]
    pub fn count_all(&self) -> Select<HasSelectors> {
        self.selector(Selector::CountAll)
    }

    /// Selects a particular column.
    #[must_use]
    pub fn column(&self, name: impl Into<CqlIdentifier>) -> Select<HasSelectors> {
        self.selector(Selector::column(name))
    }

    /// Selects an arbitrary expression given as raw text, emitted verbatim.
    #[must_use]
    pub fn raw(&self, expression: impl Into<String>) -> Select<HasSelectors> {
        self.selector(Selector::raw(expression))
    }

    /// Aliases the last added selector, as in `SELECT count(*) AS total`.
    ///
    /// Calling it again replaces the previous alias. A raw selector that
    /// already carries its own alias is not detected and fails at execution.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::IllegalState`] if no selector has been
    /// added yet, or if the last selector is `*`.
    pub fn alias(&self, alias: impl Into<CqlIdentifier>) -> Result<Select<HasSelectors>> {
        let Some((last, rest)) = self.selectors.split_last() else {
            debug!(table = %self.table, "Rejected alias without any selector");
            return Err(QueryBuilderError::illegal_state(
                "Can't alias, no selectors defined",
            ));
        };
        if last.selector().is_all() {
            debug!(table = %self.table, "Rejected alias on the * selector");
            return Err(QueryBuilderError::illegal_state(
                "Can't alias the * selector",
            ));
        }
        let mut selectors = rest.to_vec();
        selectors.push(last.with_alias(alias.into()));
        Ok(self.with_selectors(selectors))
    }

    fn is_select_all(&self) -> bool {
        matches!(self.selectors.as_slice(), [only] if only.selector().is_all())
    }

    fn with_selectors(&self, selectors: Vec<AliasedSelector>) -> Select<HasSelectors> {
        Select {
            keyspace: self.keyspace.clone(),
            table: self.table.clone(),
            json: self.json,
            distinct: self.distinct,
            selectors,
            limit: self.limit.clone(),
            allow_filtering: self.allow_filtering,
            _state: PhantomData,
        }
    }
}

// Clauses available once the projection has been touched
impl Select<HasSelectors> {
    /// Adds a LIMIT clause with a literal value.
    ///
    /// If this method or [`Select::limit_marker`] is called several times,
    /// the last value is used.
    ///
    /// # Errors
    ///
    /// Returns [`QueryBuilderError::InvalidArgument`] if `limit` is not
    /// strictly positive.
    pub fn limit(&self, limit: i32) -> Result<Self> {
        let Some(limit) = u32::try_from(limit).ok().and_then(NonZeroU32::new) else {
            debug!(table = %self.table, limit, "Rejected non-positive limit");
            return Err(QueryBuilderError::invalid_argument(
                "Limit must be strictly positive",
            ));
        };
        Ok(Self {
            limit: Some(Limit::Literal(limit)),
            ..self.clone()
        })
    }

    /// Adds a LIMIT clause whose value is bound at execution time.
    ///
    /// If this method or [`Select::limit`] is called several times, the last
    /// value is used.
    #[must_use]
    pub fn limit_marker(&self, marker: BindMarker) -> Self {
        Self {
            limit: Some(Limit::Marker(marker)),
            ..self.clone()
        }
    }

    /// Adds an ALLOW FILTERING clause. Idempotent.
    #[must_use]
    pub fn allow_filtering(&self) -> Self {
        Self {
            allow_filtering: true,
            ..self.clone()
        }
    }

    fn render(&self, pretty: bool) -> String {
        let mut renderer = Renderer::new(pretty);

        renderer.append("SELECT");
        if self.json {
            renderer.append(" JSON");
        }
        if self.distinct {
            renderer.append(" DISTINCT");
        }

        renderer.increase_indent();
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                renderer.append(",");
            }
            renderer.new_line().append(&selector.as_cql(pretty));
        }
        renderer.decrease_indent();

        renderer.new_line().append("FROM ");
        if let Some(keyspace) = &self.keyspace {
            renderer.append(&keyspace.as_cql(pretty)).append(".");
        }
        renderer.append(&self.table.as_cql(pretty));

        if let Some(limit) = &self.limit {
            renderer
                .new_line()
                .append("LIMIT ")
                .append(&limit.as_cql(pretty));
        }
        if self.allow_filtering {
            renderer.new_line().append("ALLOW FILTERING");
        }

        renderer.build()
    }
}

impl BuildableQuery for Select<HasSelectors> {
    fn build(&self, pretty: bool) -> SimpleStatement {
        let query = self.render(pretty);
        debug!(query = %query, pretty, "Built SELECT statement");
        SimpleStatement::new(query)
    }
}

impl fmt::Display for Select<HasSelectors> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
