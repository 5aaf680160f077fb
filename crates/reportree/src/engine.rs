//! The projection engine.
//!
//! The engine walks a source tree under the direction of row and column
//! queries and materializes the result as a [`Column`] tree. Projection is
//! a plain recursive fold:
//!
//! ```text
//! column query ─► leaf                  (stop)
//!              └► row queries ─► rows ─► column queries ─► ...
//! ```
//!
//! # Branching
//!
//! A sequence of row queries is evaluated in up to two passes:
//!
//! - **non-branching**: when no query in the sequence is sourced, or the
//!   source has no children, every query is evaluated once against the
//!   source itself
//! - **branching**: when at least one query is sourced, the whole sequence
//!   is evaluated again for each child of the source, in child order
//!
//! Non-branching rows come first. Within one evaluation, rows follow the
//! declaration order of the queries. A sequence made only of unsourced
//! queries (a static header, say) therefore fires exactly once, however many
//! children the source has.
//!
//! # Failures
//!
//! A query failure aborts the projection and is returned unchanged. No
//! partial report is produced.

use tracing::{debug, trace};

use crate::error::QueryResult;
use crate::model::{Column, Row};
use crate::query::{ColumnQuery, RowQuery};
use crate::source::Enumerable;
use crate::value::Value;

/// Projects `source` through a sequence of row queries into a report.
///
/// The result is a column whose rows variant holds the top-level rows.
///
/// # Example
///
/// ```
/// use reportree::{report, ColumnQuery, Enumerable, QueryContent, QueryResult, RowQuery, Value};
///
/// #[derive(Clone)]
/// struct Empty;
///
/// impl Enumerable for Empty {
///     type Children = Vec<Empty>;
///     fn children(&self) -> Vec<Empty> {
///         Vec::new()
///     }
/// }
///
/// struct Title;
///
/// impl ColumnQuery<Empty> for Title {
///     fn content(&mut self) -> QueryResult<QueryContent<'_, Empty>> {
///         Ok(Value::Leaf("Title".to_string()))
///     }
/// }
///
/// struct Header(Title);
///
/// impl RowQuery<Empty> for Header {
///     fn predicate(&mut self) -> QueryResult<bool> {
///         Ok(true)
///     }
///     fn column_queries(&mut self) -> Vec<&mut dyn ColumnQuery<Empty>> {
///         vec![&mut self.0]
///     }
/// }
///
/// let mut header = Header(Title);
/// let column = report(Empty, &mut [&mut header])?;
/// assert_eq!(column.as_rows()?.len(), 1);
/// # Ok::<(), reportree::QueryError>(())
/// ```
pub fn report<S>(source: S, row_queries: &mut [&mut dyn RowQuery<S>]) -> QueryResult<Column>
where
    S: Enumerable + Clone,
{
    debug!(queries = row_queries.len(), "projecting report");
    let rows = project_rows(source, row_queries, 0)?;
    debug!(rows = rows.len(), "report projected");
    Ok(Column::rows(rows))
}

/// Projects one column query against `source`.
///
/// A sourced query is bound to `source` first. A leaf content becomes a
/// leaf column verbatim; nested row queries are projected against the same
/// source with [`project_to_rows`].
pub fn project_to_column<S>(source: S, query: &mut dyn ColumnQuery<S>) -> QueryResult<Column>
where
    S: Enumerable + Clone,
{
    project_column(source, query, 0)
}

/// Projects a sequence of row queries against `source`.
///
/// See the [module documentation](self) for the branching rules. An empty
/// sequence, or one whose predicates all reject, yields no rows.
pub fn project_to_rows<S>(source: S, row_queries: &mut [&mut dyn RowQuery<S>]) -> QueryResult<Vec<Row>>
where
    S: Enumerable + Clone,
{
    project_rows(source, row_queries, 0)
}

fn project_column<S>(source: S, query: &mut dyn ColumnQuery<S>, depth: usize) -> QueryResult<Column>
where
    S: Enumerable + Clone,
{
    if let Some(sourced) = query.sourced() {
        sourced.set_source(source.clone());
    }

    match query.content()? {
        Value::Leaf(leaf) => Ok(Column::leaf(leaf)),
        Value::Rows(mut nested) => {
            let rows = project_rows(source, &mut nested, depth + 1)?;
            Ok(Column::rows(rows))
        }
    }
}

fn project_rows<S>(
    source: S,
    row_queries: &mut [&mut dyn RowQuery<S>],
    depth: usize,
) -> QueryResult<Vec<Row>>
where
    S: Enumerable + Clone,
{
    let sourced = row_queries
        .iter_mut()
        .map(|query| query.sourced().is_some())
        .filter(|is_sourced| *is_sourced)
        .count();

    let mut rows = Vec::new();

    // Children are only listed when some query branches over them.
    let children: Vec<S> = if sourced > 0 {
        source.children().into_iter().collect()
    } else {
        Vec::new()
    };

    if sourced == 0 || children.is_empty() {
        trace!(depth, queries = row_queries.len(), "non-branching pass");
        evaluate_sequence(&source, row_queries, depth, &mut rows)?;
    }

    if sourced > 0 {
        trace!(depth, children = children.len(), sourced, "branching pass");
        for child in &children {
            evaluate_sequence(child, row_queries, depth, &mut rows)?;
        }
    }

    Ok(rows)
}

fn evaluate_sequence<S>(
    candidate: &S,
    row_queries: &mut [&mut dyn RowQuery<S>],
    depth: usize,
    rows: &mut Vec<Row>,
) -> QueryResult<()>
where
    S: Enumerable + Clone,
{
    for (index, query) in row_queries.iter_mut().enumerate() {
        if let Some(row) = evaluate_row(candidate, &mut **query, depth)? {
            rows.push(row);
        } else {
            trace!(depth, query = index, "row query yielded no row");
        }
    }
    Ok(())
}

fn evaluate_row<S>(candidate: &S, query: &mut dyn RowQuery<S>, depth: usize) -> QueryResult<Option<Row>>
where
    S: Enumerable + Clone,
{
    if let Some(sourced) = query.sourced() {
        sourced.set_source(candidate.clone());
    }

    if !query.predicate()? {
        return Ok(None);
    }

    let mut columns = Vec::new();
    for column_query in query.column_queries() {
        columns.push(project_column(candidate.clone(), column_query, depth)?);
    }

    if columns.is_empty() {
        debug!(depth, "row query declared no columns, skipping row");
        return Ok(None);
    }

    Ok(Some(Row::new(columns)?))
}
