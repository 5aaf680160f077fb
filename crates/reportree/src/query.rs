//! Query contracts implemented by report plug-ins.
//!
//! A report is declared as a sequence of [`RowQuery`] values. Each row query
//! decides through its predicate whether it yields a row for a source, and
//! lists the [`ColumnQuery`] values producing that row's cells. A column
//! query's content is either a leaf, which ends recursion, or a further
//! sequence of row queries, which nests a table inside the cell.
//!
//! Either kind of query may also be *sourced*: it exposes a [`Sourced`]
//! hook through which the engine binds the current source before reading
//! anything else. The engine probes for the hook instead of relying on a
//! type hierarchy, and it also uses the hook to decide branching (see
//! [`project_to_rows`](crate::project_to_rows)).
//!
//! Queries may keep mutable state between evaluations (a counter, say).
//! The engine calls them single-threaded, in declaration order, and never
//! caches a predicate or content result.

use crate::error::QueryResult;
use crate::value::Value;

/// Declared content of a column query: nested row queries or a leaf.
pub type QueryContent<'q, S> = Value<&'q mut dyn RowQuery<S>>;

/// Late-bound source injection.
pub trait Sourced<S> {
    /// Binds the source the query is about to be evaluated against.
    fn set_source(&mut self, source: S);
}

/// Produces the content of one column.
pub trait ColumnQuery<S> {
    /// The source-binding hook, for queries that need the current source.
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        None
    }

    /// Reads the column's content.
    ///
    /// A leaf ends recursion. Rows hand nested row queries back to the
    /// engine, which projects them against the same source.
    fn content(&mut self) -> QueryResult<QueryContent<'_, S>>;
}

/// Produces at most one row per candidate source.
pub trait RowQuery<S> {
    /// The source-binding hook, for queries that need the current source.
    ///
    /// Declaring this hook also marks the row query as per-child: a
    /// sequence containing a sourced row query is evaluated once per child
    /// of the source.
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        None
    }

    /// Whether the candidate source yields a row. `false` is not an error.
    fn predicate(&mut self) -> QueryResult<bool>;

    /// The row's cells, in order.
    fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<S>>;
}

impl<S, Q> ColumnQuery<S> for &mut Q
where
    Q: ColumnQuery<S> + ?Sized,
{
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        (**self).sourced()
    }

    fn content(&mut self) -> QueryResult<QueryContent<'_, S>> {
        (**self).content()
    }
}

impl<S, Q> ColumnQuery<S> for Box<Q>
where
    Q: ColumnQuery<S> + ?Sized,
{
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        (**self).sourced()
    }

    fn content(&mut self) -> QueryResult<QueryContent<'_, S>> {
        (**self).content()
    }
}

impl<S, Q> RowQuery<S> for &mut Q
where
    Q: RowQuery<S> + ?Sized,
{
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        (**self).sourced()
    }

    fn predicate(&mut self) -> QueryResult<bool> {
        (**self).predicate()
    }

    fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<S>> {
        (**self).column_queries()
    }
}

impl<S, Q> RowQuery<S> for Box<Q>
where
    Q: RowQuery<S> + ?Sized,
{
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        (**self).sourced()
    }

    fn predicate(&mut self) -> QueryResult<bool> {
        (**self).predicate()
    }

    fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<S>> {
        (**self).column_queries()
    }
}
