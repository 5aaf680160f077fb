//! Column queries.

use reportree::{ColumnQuery, QueryContent, QueryResult, RowQuery, Sourced, Value};

use crate::error::QueryFailure;

/// A column holding fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }
}

impl<S> ColumnQuery<S> for Literal {
    fn content(&mut self) -> QueryResult<QueryContent<'_, S>> {
        Ok(Value::Leaf(self.text.clone()))
    }
}

/// A column numbering the rows it appears in.
///
/// Each read yields the current value and advances by `step`. The counter
/// is never reset by the engine, so one counter shared by several reports
/// keeps counting across them. Advancing past either end of `i64` wraps.
///
/// # Example
///
/// ```
/// use reportree_queries::Counter;
///
/// let mut counter = Counter::new(1, 1);
/// assert_eq!(counter.next_value(), 1);
/// assert_eq!(counter.next_value(), 2);
/// assert_eq!(counter.peek(), 3);
/// assert_eq!(counter.issued(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    next: i64,
    step: i64,
    issued: usize,
}

impl Counter {
    pub fn new(start: i64, step: i64) -> Self {
        Counter {
            next: start,
            step,
            issued: 0,
        }
    }

    /// The value the next read yields.
    pub fn peek(&self) -> i64 {
        self.next
    }

    /// Number of values yielded so far.
    pub fn issued(&self) -> usize {
        self.issued
    }

    pub fn next_value(&mut self) -> i64 {
        let value = self.next;
        self.next = self.next.wrapping_add(self.step);
        self.issued += 1;
        value
    }
}

impl Default for Counter {
    fn default() -> Self {
        Counter::new(0, 1)
    }
}

impl<S> ColumnQuery<S> for Counter {
    fn content(&mut self) -> QueryResult<QueryContent<'_, S>> {
        Ok(Value::Leaf(self.next_value().to_string()))
    }
}

/// A sourced column printing a field of the bound source.
///
/// # Example
///
/// ```
/// use reportree::{ColumnQuery, Value};
/// use reportree_queries::Field;
///
/// let mut name = Field::<String, _>::new(|s: &String| s.to_uppercase());
/// if let Some(hook) = ColumnQuery::<String>::sourced(&mut name) {
///     hook.set_source("abc".to_string());
/// }
/// let content = ColumnQuery::<String>::content(&mut name)?;
/// assert_eq!(content.into_leaf()?, "ABC");
/// # Ok::<(), reportree::QueryError>(())
/// ```
pub struct Field<S, F> {
    source: Option<S>,
    get: F,
}

impl<S, F> Field<S, F>
where
    F: FnMut(&S) -> String,
{
    pub fn new(get: F) -> Self {
        Field { source: None, get }
    }
}

impl<S, F> Sourced<S> for Field<S, F> {
    fn set_source(&mut self, source: S) {
        self.source = Some(source);
    }
}

impl<S, F> ColumnQuery<S> for Field<S, F>
where
    F: FnMut(&S) -> String,
{
    fn sourced(&mut self) -> Option<&mut dyn Sourced<S>> {
        Some(self)
    }

    fn content(&mut self) -> QueryResult<QueryContent<'_, S>> {
        let source = self
            .source
            .as_ref()
            .ok_or(QueryFailure::Unbound { query: "field" })?;
        Ok(Value::Leaf((self.get)(source)))
    }
}

/// A column holding a nested table.
///
/// The nested row queries are projected against the same source as the
/// row this column belongs to, so sourced row queries inside branch over
/// that source's children.
pub struct Nested<'q, S> {
    rows: Vec<Box<dyn RowQuery<S> + 'q>>,
}

impl<'q, S> Nested<'q, S> {
    pub fn new() -> Self {
        Nested { rows: Vec::new() }
    }

    /// Appends a row query to the nested sequence.
    pub fn row(mut self, query: impl RowQuery<S> + 'q) -> Self {
        self.rows.push(Box::new(query));
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S> Default for Nested<'_, S> {
    fn default() -> Self {
        Nested::new()
    }
}

impl<S> ColumnQuery<S> for Nested<'_, S> {
    fn content(&mut self) -> QueryResult<QueryContent<'_, S>> {
        Ok(Value::Rows(
            self.rows
                .iter_mut()
                .map(|query| &mut **query as &mut dyn RowQuery<S>)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf<Q: ColumnQuery<()>>(query: &mut Q) -> String {
        query.content().unwrap().into_leaf().unwrap()
    }

    #[test]
    fn literal_is_constant() {
        let mut literal = Literal::new("x");
        assert_eq!(leaf(&mut literal), "x");
        assert_eq!(leaf(&mut literal), "x");
        assert!(ColumnQuery::<()>::sourced(&mut literal).is_none());
    }

    #[test]
    fn counter_steps() {
        let mut counter = Counter::new(10, -2);
        assert_eq!(leaf(&mut counter), "10");
        assert_eq!(leaf(&mut counter), "8");
        assert_eq!(counter.peek(), 6);
        assert_eq!(counter.issued(), 2);
    }

    #[test]
    fn counter_wraps_at_the_end_of_range() {
        let mut counter = Counter::new(i64::MAX, 1);
        assert_eq!(leaf(&mut counter), i64::MAX.to_string());
        assert_eq!(counter.peek(), i64::MIN);
        assert_eq!(counter.issued(), 1);
    }

    #[test]
    fn counter_default_starts_at_zero() {
        let mut counter = Counter::default();
        assert_eq!(leaf(&mut counter), "0");
        assert_eq!(leaf(&mut counter), "1");
    }

    #[test]
    fn unbound_field_fails() {
        let mut field = Field::<u32, _>::new(|n: &u32| n.to_string());
        let Err(err) = ColumnQuery::<u32>::content(&mut field) else {
            panic!("unbound field read succeeded");
        };
        assert_eq!(err.to_string(), "field query read before a source was bound");
    }

    #[test]
    fn nested_is_rows() {
        let mut nested: Nested<'_, ()> = Nested::new();
        assert!(nested.is_empty());
        assert!(nested.content().unwrap().is_rows());
    }
}
