//! Row queries.
//!
//! [`StaticRow`] yields one row per evaluation of its sequence, whatever
//! the source; use it for headers and footers. [`SourcedRow`] is bound to
//! each child of the source in turn and yields a row for every child its
//! predicate accepts.

use reportree::{ColumnQuery, QueryResult, RowQuery, Sourced};
use tracing::trace;

use crate::error::QueryFailure;
use crate::filter::FieldFilter;

type Columns<'q, S> = Vec<Box<dyn ColumnQuery<S> + 'q>>;

fn borrow_columns<'a, 'q, S>(columns: &'a mut Columns<'q, S>) -> Vec<&'a mut dyn ColumnQuery<S>> {
    columns
        .iter_mut()
        .map(|column| &mut **column as &mut dyn ColumnQuery<S>)
        .collect()
}

/// An unsourced row with a fixed set of columns.
pub struct StaticRow<'q, S> {
    columns: Columns<'q, S>,
}

impl<'q, S> StaticRow<'q, S> {
    pub fn new() -> Self {
        StaticRow {
            columns: Vec::new(),
        }
    }

    /// Appends a column query.
    pub fn column(mut self, query: impl ColumnQuery<S> + 'q) -> Self {
        self.columns.push(Box::new(query));
        self
    }
}

impl<S> Default for StaticRow<'_, S> {
    fn default() -> Self {
        StaticRow::new()
    }
}

impl<S> RowQuery<S> for StaticRow<'_, S> {
    fn predicate(&mut self) -> QueryResult<bool> {
        Ok(true)
    }

    fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<S>> {
        borrow_columns(&mut self.columns)
    }
}

/// A sourced row, yielding one row per accepted child.
///
/// # Example
///
/// ```
/// use reportree::{report, Enumerable, Location};
/// use reportree_queries::{Field, FieldFilter, Op, SourcedRow};
///
/// #[derive(Clone)]
/// struct Dir(&'static str, Vec<Dir>);
///
/// impl Enumerable for Dir {
///     type Children = Vec<Dir>;
///     fn children(&self) -> Vec<Dir> {
///         self.1.clone()
///     }
/// }
///
/// let tree = Dir("/", vec![Dir("src", vec![]), Dir("target", vec![]), Dir("tests", vec![])]);
/// let filter = FieldFilter::<Dir>::new(|d: &Dir| d.0.to_string(), Op::Ne, "target")?;
/// let mut rows = SourcedRow::filtered(filter).column(Field::new(|d: &Dir| d.0.to_string()));
///
/// let column = report(tree, &mut [&mut rows])?;
/// assert_eq!(column.as_rows()?.len(), 2);
/// assert_eq!(column.leaf_at(&Location::root().nest(1, 0))?, "tests");
/// # Ok::<(), reportree::QueryError>(())
/// ```
pub struct SourcedRow<'q, S> {
    source: Option<S>,
    predicate: Option<Box<dyn FnMut(&S) -> bool + 'q>>,
    columns: Columns<'q, S>,
}

impl<'q, S> SourcedRow<'q, S> {
    /// Accepts every child.
    pub fn all() -> Self {
        SourcedRow {
            source: None,
            predicate: None,
            columns: Vec::new(),
        }
    }

    /// Accepts the children for which `predicate` holds.
    pub fn when(predicate: impl FnMut(&S) -> bool + 'q) -> Self {
        SourcedRow {
            predicate: Some(Box::new(predicate)),
            ..SourcedRow::all()
        }
    }

    /// Accepts the children passing `filter`.
    pub fn filtered(filter: FieldFilter<S>) -> Self
    where
        S: 'q,
    {
        SourcedRow::when(move |source: &S| filter.matches(source))
    }

    /// Appends a column query.
    pub fn column(mut self, query: impl ColumnQuery<S> + 'q) -> Self {
        self.columns.push(Box::new(query));
        self
    }
}

impl<S> Sourced<S> for SourcedRow<'_, S> {
    fn set_source(&mut self, source: S) {
        self.source = Some(source);
    }
}

impl<S> RowQuery<S> for SourcedRow<'_, S> {
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        Some(self)
    }

    fn predicate(&mut self) -> QueryResult<bool> {
        let source = self
            .source
            .as_ref()
            .ok_or(QueryFailure::Unbound { query: "row" })?;
        let accepted = match self.predicate.as_mut() {
            Some(predicate) => predicate(source),
            None => true,
        };
        if !accepted {
            trace!(columns = self.columns.len(), "sourced row rejected its source");
        }
        Ok(accepted)
    }

    fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<S>> {
        borrow_columns(&mut self.columns)
    }
}
