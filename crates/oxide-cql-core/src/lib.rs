//! # oxide-cql-core
//!
//! An immutable, type-safe builder for CQL `SELECT` queries.
//!
//! This crate provides:
//! - A fluent builder where every call returns a new statement, so a common
//!   prefix can be reused for several queries
//! - A typestate split between a statement without selectors and one with
//!   selectors, so `LIMIT`, `ALLOW FILTERING` and `build` cannot be called
//!   too early
//! - Compact (single line) and pretty (indented) rendering from the same
//!   statement
//!
//! ## Building a query
//!
//! ```rust
//! use oxide_cql_core::{select_from, BuildableQuery};
//!
//! let query = select_from("users")
//!     .column("id")
//!     .count_all()
//!     .alias("total")?
//!     .limit(10)?
//!     .build(false);
//!
//! assert_eq!(
//!     query.query(),
//!     "SELECT \"id\", count(*) AS \"total\" FROM \"users\" LIMIT 10"
//! );
//! # Ok::<(), oxide_cql_core::QueryBuilderError>(())
//! ```
//!
//! ## Pretty rendering
//!
//! ```rust
//! use oxide_cql_core::{bind_marker_named, select_from_qualified, BuildableQuery};
//!
//! let query = select_from_qualified("shop", "orders")
//!     .column("id")
//!     .column("amount")
//!     .limit_marker(bind_marker_named("max"))
//!     .allow_filtering()
//!     .build(true);
//!
//! assert_eq!(
//!     query.query(),
//!     "SELECT\n    id,\n    amount\nFROM shop.orders\nLIMIT :max\nALLOW FILTERING"
//! );
//! ```
//!
//! ## Sharing a prefix
//!
//! ```rust
//! use oxide_cql_core::select_from;
//!
//! let base = select_from("events").column("id");
//! let limited = base.limit(5)?;
//! let filtered = base.allow_filtering();
//!
//! assert_eq!(limited.to_string(), "SELECT \"id\" FROM \"events\" LIMIT 5");
//! assert_eq!(filtered.to_string(), "SELECT \"id\" FROM \"events\" ALLOW FILTERING");
//! assert_eq!(base.to_string(), "SELECT \"id\" FROM \"events\"");
//! # Ok::<(), oxide_cql_core::QueryBuilderError>(())
//! ```

pub mod builder;
pub mod error;
pub mod identifier;

pub use builder::{
    bind_marker, bind_marker_named, select_from, select_from_qualified, BindMarker,
    BuildableQuery, Select, SelectFrom, Selector, SimpleStatement,
};
pub use error::{QueryBuilderError, Result};
pub use identifier::CqlIdentifier;
