//! Reportree - project recursively enumerable trees into nested tables.
//!
//! Reportree takes any source type that can enumerate children of its own
//! type, and a declarative set of row and column queries, and produces a
//! nested tabular document: rows of columns, where each column is either a
//! leaf value or another table.
//!
//! - [`Enumerable`]: the source contract ("list my children")
//! - [`RowQuery`], [`ColumnQuery`], [`Sourced`]: the query contracts
//! - [`report`], [`project_to_column`], [`project_to_rows`]: the engine
//! - [`Column`], [`Row`], [`Value`]: the materialized document model
//! - [`Location`]: addressing cells of a materialized report
//!
//! Rendering reports as box-drawn text, and parsing that text back, lives
//! in the `reportree-render` crate. Ready-made queries live in
//! `reportree-queries`.
//!
//! # Quick Start
//!
//! ```rust
//! use reportree::{
//!     report, ColumnQuery, Enumerable, Location, QueryContent, QueryResult, RowQuery, Sourced,
//!     Value,
//! };
//!
//! #[derive(Clone)]
//! struct Item {
//!     name: &'static str,
//!     ok: bool,
//!     children: Vec<Item>,
//! }
//!
//! impl Enumerable for Item {
//!     type Children = Vec<Item>;
//!     fn children(&self) -> Vec<Item> {
//!         self.children.clone()
//!     }
//! }
//!
//! // A sourced column query printing one field of the bound item.
//! struct Field {
//!     item: Option<Item>,
//!     get: fn(&Item) -> String,
//! }
//!
//! impl Sourced<Item> for Field {
//!     fn set_source(&mut self, source: Item) {
//!         self.item = Some(source);
//!     }
//! }
//!
//! impl ColumnQuery<Item> for Field {
//!     fn sourced(&mut self) -> Option<&mut dyn Sourced<Item>> {
//!         Some(self)
//!     }
//!     fn content(&mut self) -> QueryResult<QueryContent<'_, Item>> {
//!         let item = self.item.as_ref().ok_or("unbound")?;
//!         Ok(Value::Leaf((self.get)(item)))
//!     }
//! }
//!
//! // A sourced row query: one row per child item.
//! struct PerItem {
//!     name: Field,
//!     ok: Field,
//! }
//!
//! impl Sourced<Item> for PerItem {
//!     fn set_source(&mut self, _source: Item) {}
//! }
//!
//! impl RowQuery<Item> for PerItem {
//!     fn sourced(&mut self) -> Option<&mut dyn Sourced<Item>> {
//!         Some(self)
//!     }
//!     fn predicate(&mut self) -> QueryResult<bool> {
//!         Ok(true)
//!     }
//!     fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<Item>> {
//!         vec![&mut self.name, &mut self.ok]
//!     }
//! }
//!
//! let leaf = |name, ok| Item { name, ok, children: vec![] };
//! let root = Item { name: "root", ok: true, children: vec![leaf("A", true), leaf("B", false)] };
//!
//! let mut per_item = PerItem {
//!     name: Field { item: None, get: |i| i.name.to_string() },
//!     ok: Field { item: None, get: |i| if i.ok { "True".into() } else { "False".into() } },
//! };
//!
//! let column = report(root, &mut [&mut per_item])?;
//! assert_eq!(column.leaf_at(&Location::root().nest(0, 0))?, "A");
//! assert_eq!(column.leaf_at(&Location::root().nest(1, 1))?, "False");
//! # Ok::<(), reportree::QueryError>(())
//! ```

mod engine;
mod error;
mod location;
mod model;
mod query;
mod source;
mod value;

// Re-export public API
pub use engine::{project_to_column, project_to_rows, report};
pub use error::{Axis, QueryError, QueryResult, ReportError, Result};
pub use location::{Location, Step};
pub use model::{Column, Row};
pub use query::{ColumnQuery, QueryContent, RowQuery, Sourced};
pub use source::Enumerable;
pub use value::{Value, Variant};
