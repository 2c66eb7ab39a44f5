//! Immutable CQL SELECT builder.
//!
//! This module provides a SELECT builder using the typestate pattern.
//! Clauses that need a projection are not available until one exists.
//!
//! # Example
//!
//! ```rust
//! use oxide_cql_core::builder::{select_from, BuildableQuery};
//!
//! let select = select_from("users").column("id").column("name");
//!
//! assert_eq!(
//!     select.build(false).query(),
//!     "SELECT \"id\", \"name\" FROM \"users\""
//! );
//! ```

mod bind_marker;
mod renderer;
mod select;
mod selector;
mod statement;

pub use bind_marker::{bind_marker, bind_marker_named, BindMarker};
pub use select::{
    select_from, select_from_qualified, HasSelectors, Limit, NoSelectors, Select, SelectFrom,
};
pub use selector::{AliasedSelector, Selector};
pub use statement::{BuildableQuery, SimpleStatement};
