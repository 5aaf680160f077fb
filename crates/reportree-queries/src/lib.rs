//! Ready-made queries for reportree.
//!
//! Most reports are assembled from a handful of recurring pieces: fixed
//! text, a running number, a field of the current source, a nested table.
//! This crate provides them as builders over the
//! [`RowQuery`](reportree::RowQuery) and [`ColumnQuery`](reportree::ColumnQuery)
//! contracts.
//!
//! | Query | Kind | Sourced |
//! |-------|------|---------|
//! | [`Literal`] | column | no |
//! | [`Counter`] | column | no |
//! | [`Field`] | column | yes |
//! | [`Nested`] | column | no |
//! | [`StaticRow`] | row | no |
//! | [`SourcedRow`] | row | yes |
//!
//! Row and column builders take their parts by value. To inspect a part
//! after the report runs (a [`Counter`], say), pass a `&mut` reference
//! instead; references to queries are queries too.
//!
//! # Example
//!
//! ```rust
//! use reportree::{report, Enumerable, Location};
//! use reportree_queries::{Counter, Field, SourcedRow};
//!
//! #[derive(Clone)]
//! struct Task {
//!     title: &'static str,
//!     subtasks: Vec<Task>,
//! }
//!
//! impl Enumerable for Task {
//!     type Children = Vec<Task>;
//!     fn children(&self) -> Vec<Task> {
//!         self.subtasks.clone()
//!     }
//! }
//!
//! let task = |title| Task { title, subtasks: vec![] };
//! let project = Task { title: "release", subtasks: vec![task("tag"), task("publish")] };
//!
//! let mut counter = Counter::new(1, 1);
//! let mut tasks = SourcedRow::all()
//!     .column(&mut counter)
//!     .column(Field::new(|t: &Task| t.title.to_string()));
//!
//! let column = report(project, &mut [&mut tasks])?;
//! drop(tasks);
//!
//! assert_eq!(column.leaf_at(&Location::root().nest(0, 1))?, "tag");
//! assert_eq!(column.leaf_at(&Location::root().nest(1, 0))?, "2");
//! assert_eq!(counter.issued(), 2);
//! # Ok::<(), reportree::QueryError>(())
//! ```

mod column;
mod error;
mod filter;
mod row;

pub use column::{Counter, Field, Literal, Nested};
pub use error::{QueryFailure, Result};
pub use filter::{FieldFilter, Op};
pub use row::{SourcedRow, StaticRow};
