//! Error types for the reportree crate.

use thiserror::Error;

use crate::value::Variant;

/// Errors raised when reading or addressing a materialized report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The value union was read as the variant it does not hold.
    #[error("wrong variant access: expected {expected}, found {found}")]
    WrongVariantAccess { expected: Variant, found: Variant },

    /// A location step addressed a row or column that does not exist.
    #[error("location {location} is out of range: {axis} {index} at depth {depth}, only {len} available")]
    LocationOutOfRange {
        location: String,
        depth: usize,
        axis: Axis,
        index: usize,
        len: usize,
    },

    /// A row was built without any columns.
    #[error("a row must hold at least one column")]
    EmptyRow,

    /// A location string could not be parsed.
    #[error("invalid location '{input}': {reason}")]
    InvalidLocation { input: String, reason: &'static str },

    /// A leaf value could not be converted into the requested type.
    #[error("cannot read leaf '{value}' as {target}: {message}")]
    LeafConversion {
        value: String,
        target: &'static str,
        message: String,
    },
}

/// Which index of a location step was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Failure raised by a caller-supplied query.
///
/// The engine hands these back exactly as the query produced them, so callers
/// can downcast to their own error type.
pub type QueryError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for query evaluation and projection.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
