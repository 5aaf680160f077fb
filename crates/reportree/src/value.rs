//! The two-variant value union shared by queries and projected columns.
//!
//! A [`Value`] is either an ordered sequence of rows or a single leaf payload.
//! The same shape is used twice:
//!
//! - a [`ColumnQuery`](crate::ColumnQuery) declares its content as
//!   `Value<&mut dyn RowQuery<S>>` (nested row queries, or a leaf)
//! - a projected [`Column`](crate::Column) holds `Value<Row>`
//!
//! Consume a value generically with [`Value::fold`], which forces a handler
//! for both variants. The `as_*`/`into_*` accessors fail with
//! [`ReportError::WrongVariantAccess`] when the other variant is present.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Either an ordered sequence of rows or a leaf payload.
///
/// The variant is fixed at construction; there are no setters.
///
/// # Example
///
/// ```
/// use reportree::{Value, Variant};
///
/// let leaf: Value<u8> = Value::Leaf("done".to_string());
/// assert_eq!(leaf.variant(), Variant::Leaf);
///
/// let size = leaf.fold(|rows| rows.len(), |text| text.len());
/// assert_eq!(size, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value<R, L = String> {
    /// Ordered rows, possibly empty.
    Rows(Vec<R>),
    /// Opaque terminal payload.
    Leaf(L),
}

/// Discriminant of a [`Value`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Rows,
    Leaf,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Rows => f.write_str("rows"),
            Variant::Leaf => f.write_str("leaf"),
        }
    }
}

impl<R, L> Value<R, L> {
    /// Returns which variant this value holds.
    pub fn variant(&self) -> Variant {
        match self {
            Value::Rows(_) => Variant::Rows,
            Value::Leaf(_) => Variant::Leaf,
        }
    }

    /// Returns `true` if this value holds rows.
    pub fn is_rows(&self) -> bool {
        matches!(self, Value::Rows(_))
    }

    /// Returns `true` if this value holds a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    /// Consumes the value with one handler per variant.
    pub fn fold<U>(self, on_rows: impl FnOnce(Vec<R>) -> U, on_leaf: impl FnOnce(L) -> U) -> U {
        match self {
            Value::Rows(rows) => on_rows(rows),
            Value::Leaf(leaf) => on_leaf(leaf),
        }
    }

    /// Borrowing counterpart of [`Value::fold`].
    pub fn fold_ref<'a, U>(
        &'a self,
        on_rows: impl FnOnce(&'a [R]) -> U,
        on_leaf: impl FnOnce(&'a L) -> U,
    ) -> U {
        match self {
            Value::Rows(rows) => on_rows(rows),
            Value::Leaf(leaf) => on_leaf(leaf),
        }
    }

    /// Transforms the leaf payload, leaving rows untouched.
    pub fn map_leaf<M>(self, f: impl FnOnce(L) -> M) -> Value<R, M> {
        self.fold(Value::Rows, |leaf| Value::Leaf(f(leaf)))
    }

    /// Borrows the rows.
    pub fn as_rows(&self) -> Result<&[R]> {
        match self {
            Value::Rows(rows) => Ok(rows),
            Value::Leaf(_) => Err(self.wrong(Variant::Rows)),
        }
    }

    /// Borrows the leaf payload.
    pub fn as_leaf(&self) -> Result<&L> {
        match self {
            Value::Leaf(leaf) => Ok(leaf),
            Value::Rows(_) => Err(self.wrong(Variant::Leaf)),
        }
    }

    /// Takes the rows out of the value.
    pub fn into_rows(self) -> Result<Vec<R>> {
        match self {
            Value::Rows(rows) => Ok(rows),
            Value::Leaf(_) => Err(wrong(Variant::Rows, Variant::Leaf)),
        }
    }

    /// Takes the leaf payload out of the value.
    pub fn into_leaf(self) -> Result<L> {
        match self {
            Value::Leaf(leaf) => Ok(leaf),
            Value::Rows(_) => Err(wrong(Variant::Leaf, Variant::Rows)),
        }
    }

    fn wrong(&self, expected: Variant) -> ReportError {
        wrong(expected, self.variant())
    }
}

fn wrong(expected: Variant, found: Variant) -> ReportError {
    ReportError::WrongVariantAccess { expected, found }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Plain = Value<u32>;

    #[test]
    fn variant_checks() {
        let rows: Plain = Value::Rows(vec![1, 2]);
        let leaf: Plain = Value::Leaf("x".into());

        assert!(rows.is_rows());
        assert!(!rows.is_leaf());
        assert!(leaf.is_leaf());
        assert_eq!(rows.variant(), Variant::Rows);
        assert_eq!(leaf.variant(), Variant::Leaf);
    }

    #[test]
    fn fold_visits_matching_handler() {
        let rows: Plain = Value::Rows(vec![1, 2, 3]);
        let described = rows.fold(|r| format!("{} rows", r.len()), |l| format!("leaf {l}"));
        assert_eq!(described, "3 rows");

        let leaf: Plain = Value::Leaf("ok".into());
        let described = leaf.fold_ref(|r| format!("{} rows", r.len()), |l| format!("leaf {l}"));
        assert_eq!(described, "leaf ok");
    }

    #[test]
    fn wrong_variant_access_fails() {
        let leaf: Plain = Value::Leaf("ok".into());
        assert_eq!(
            leaf.as_rows(),
            Err(ReportError::WrongVariantAccess {
                expected: Variant::Rows,
                found: Variant::Leaf,
            })
        );

        let rows: Plain = Value::Rows(vec![]);
        assert!(matches!(
            rows.into_leaf(),
            Err(ReportError::WrongVariantAccess {
                expected: Variant::Leaf,
                found: Variant::Rows,
            })
        ));
    }

    #[test]
    fn right_variant_access_succeeds() {
        let rows: Plain = Value::Rows(vec![7]);
        assert_eq!(rows.as_rows().unwrap(), &[7]);
        assert_eq!(rows.into_rows().unwrap(), vec![7]);

        let leaf: Plain = Value::Leaf("ok".into());
        assert_eq!(leaf.as_leaf().unwrap(), "ok");
        assert_eq!(leaf.into_leaf().unwrap(), "ok");
    }

    #[test]
    fn map_leaf_keeps_rows() {
        let rows: Plain = Value::Rows(vec![1]);
        assert_eq!(rows.map_leaf(|l| l.len()), Value::Rows(vec![1]));

        let leaf: Plain = Value::Leaf("four".into());
        assert_eq!(leaf.map_leaf(|l| l.len()), Value::<u32, usize>::Leaf(4));
    }
}
