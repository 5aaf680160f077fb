//! The materialized document model: columns holding rows or leaves.
//!
//! A report is a [`Column`] whose content is the rows variant. Every
//! [`Row`] holds one or more columns, and each of those is either a leaf
//! cell or another nested table. The tree is immutable once built.

use std::any::type_name;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, ReportError, Result};
use crate::location::Location;
use crate::value::Value;

/// One cell of a report: a leaf value or a nested sequence of rows.
///
/// # Example
///
/// ```
/// use reportree::{Column, Location, Row};
///
/// let report = Column::rows(vec![
///     Row::new(vec![Column::leaf("A"), Column::leaf("True")])?,
///     Row::new(vec![Column::leaf("B"), Column::leaf("False")])?,
/// ]);
///
/// let cell = report.get(&Location::root().nest(1, 0))?;
/// assert_eq!(cell.as_leaf()?, "B");
/// assert!(!report.leaf_at(&Location::root().nest(0, 1))?.is_empty());
/// # Ok::<(), reportree::ReportError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    content: Value<Row>,
}

impl Column {
    /// Wraps an already-built value.
    pub fn new(content: Value<Row>) -> Self {
        Column { content }
    }

    /// Creates a leaf column.
    pub fn leaf(value: impl Into<String>) -> Self {
        Column::new(Value::Leaf(value.into()))
    }

    /// Creates a column holding nested rows.
    pub fn rows(rows: impl IntoIterator<Item = Row>) -> Self {
        Column::new(Value::Rows(rows.into_iter().collect()))
    }

    /// Returns the column's content.
    pub fn content(&self) -> &Value<Row> {
        &self.content
    }

    /// Takes the content out of the column.
    pub fn into_content(self) -> Value<Row> {
        self.content
    }

    pub fn is_leaf(&self) -> bool {
        self.content.is_leaf()
    }

    pub fn is_rows(&self) -> bool {
        self.content.is_rows()
    }

    /// Borrows the nested rows, failing on a leaf.
    pub fn as_rows(&self) -> Result<&[Row]> {
        self.content.as_rows()
    }

    /// Borrows the leaf text, failing on nested rows.
    pub fn as_leaf(&self) -> Result<&str> {
        self.content.as_leaf().map(String::as_str)
    }

    /// Parses the leaf text into `T`.
    ///
    /// ```
    /// use reportree::Column;
    ///
    /// assert_eq!(Column::leaf("42").leaf_as::<u32>()?, 42);
    /// assert!(Column::leaf("True").leaf_as::<u32>().is_err());
    /// # Ok::<(), reportree::ReportError>(())
    /// ```
    pub fn leaf_as<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let text = self.as_leaf()?;
        text.parse().map_err(|err: T::Err| ReportError::LeafConversion {
            value: text.to_string(),
            target: type_name::<T>(),
            message: err.to_string(),
        })
    }

    /// Follows `location` from this column.
    ///
    /// Each step selects a row of the current column and then a column of
    /// that row. Stepping into a leaf fails with
    /// [`ReportError::WrongVariantAccess`]; an index past the end fails with
    /// [`ReportError::LocationOutOfRange`].
    pub fn get(&self, location: &Location) -> Result<&Column> {
        let mut current = self;
        for (depth, step) in location.steps().iter().enumerate() {
            let rows = current.as_rows()?;
            let row = rows.get(step.row).ok_or_else(|| ReportError::LocationOutOfRange {
                location: location.to_string(),
                depth,
                axis: Axis::Row,
                index: step.row,
                len: rows.len(),
            })?;
            current = row
                .get(step.column)
                .ok_or_else(|| ReportError::LocationOutOfRange {
                    location: location.to_string(),
                    depth,
                    axis: Axis::Column,
                    index: step.column,
                    len: row.len(),
                })?;
        }
        Ok(current)
    }

    /// Follows `location` and reads the leaf text found there.
    pub fn leaf_at(&self, location: &Location) -> Result<&str> {
        self.get(location)?.as_leaf()
    }

    /// Nesting depth: 0 for a leaf, 1 for rows of leaves, and so on.
    pub fn depth(&self) -> usize {
        self.content.fold_ref(
            |rows| {
                1 + rows
                    .iter()
                    .flat_map(Row::columns)
                    .map(Column::depth)
                    .max()
                    .unwrap_or(0)
            },
            |_| 0,
        )
    }
}

impl From<Value<Row>> for Column {
    fn from(content: Value<Row>) -> Self {
        Column::new(content)
    }
}

/// An ordered, non-empty sequence of columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Row {
    columns: Vec<Column>,
}

impl Row {
    /// Creates a row, failing with [`ReportError::EmptyRow`] when `columns`
    /// is empty.
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let columns: Vec<Column> = columns.into_iter().collect();
        if columns.is_empty() {
            return Err(ReportError::EmptyRow);
        }
        Ok(Row { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Returns the column at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Number of columns; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

impl TryFrom<Vec<Column>> for Row {
    type Error = ReportError;

    fn try_from(columns: Vec<Column>) -> Result<Self> {
        Row::new(columns)
    }
}

impl From<Row> for Vec<Column> {
    fn from(row: Row) -> Self {
        row.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Variant;

    fn sample() -> Column {
        let nested = Column::rows(vec![
            Row::new(vec![Column::leaf("1")]).unwrap(),
            Row::new(vec![Column::leaf("2")]).unwrap(),
        ]);
        Column::rows(vec![
            Row::new(vec![Column::leaf("A"), Column::leaf("True")]).unwrap(),
            Row::new(vec![Column::leaf("B"), nested]).unwrap(),
        ])
    }

    #[test]
    fn empty_row_is_rejected() {
        assert_eq!(Row::new(Vec::new()), Err(ReportError::EmptyRow));
    }

    #[test]
    fn get_root_returns_self() {
        let report = sample();
        assert_eq!(report.get(&Location::root()).unwrap(), &report);
    }

    #[test]
    fn get_nested_leaf() {
        let report = sample();
        let location = Location::root().nest(1, 1).nest(1, 0);
        assert_eq!(report.leaf_at(&location).unwrap(), "2");
    }

    #[test]
    fn get_row_out_of_range() {
        let report = sample();
        let err = report.get(&Location::root().nest(5, 0)).unwrap_err();
        assert!(matches!(
            err,
            ReportError::LocationOutOfRange {
                depth: 0,
                axis: Axis::Row,
                index: 5,
                len: 2,
                ..
            }
        ));
    }

    #[test]
    fn get_column_out_of_range() {
        let report = sample();
        let err = report
            .get(&Location::root().nest(1, 1).nest(0, 3))
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::LocationOutOfRange {
                depth: 1,
                axis: Axis::Column,
                index: 3,
                len: 1,
                ..
            }
        ));
    }

    #[test]
    fn stepping_into_leaf_is_wrong_variant() {
        let report = sample();
        let err = report
            .get(&Location::root().nest(0, 0).nest(0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            ReportError::WrongVariantAccess {
                expected: Variant::Rows,
                found: Variant::Leaf,
            }
        );
    }

    #[test]
    fn leaf_as_parses_typed_values() {
        assert!(Column::leaf("true").leaf_as::<bool>().unwrap());
        assert_eq!(Column::leaf("-3").leaf_as::<i64>().unwrap(), -3);

        let err = Column::leaf("x").leaf_as::<i64>().unwrap_err();
        assert!(matches!(err, ReportError::LeafConversion { target: "i64", .. }));
    }

    #[test]
    fn depth_counts_nesting() {
        assert_eq!(Column::leaf("x").depth(), 0);
        assert_eq!(Column::rows(Vec::new()).depth(), 1);
        assert_eq!(sample().depth(), 2);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"[["A","True"],["B",[["1"],["2"]]]]"#);

        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn deserializing_empty_row_fails() {
        let result: std::result::Result<Column, _> = serde_json::from_str("[[]]");
        assert!(result.is_err());
    }
}
