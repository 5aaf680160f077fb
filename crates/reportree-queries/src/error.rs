//! Error types for the ready-made queries.

use thiserror::Error;

/// Errors raised while building or evaluating the ready-made queries.
#[derive(Debug, Error)]
pub enum QueryFailure {
    /// A sourced query was read before the engine bound a source to it.
    #[error("{query} query read before a source was bound")]
    Unbound { query: &'static str },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Operator name not recognized.
    #[error("unknown operator '{0}' (expected one of: eq, ne, contains, starts-with, ends-with, regex)")]
    UnknownOp(String),

    /// Filter expression not of the form `<op>:<value>`.
    #[error("invalid filter '{0}' (expected <op>:<value>)")]
    InvalidFilter(String),
}

/// Result type for query construction.
pub type Result<T> = std::result::Result<T, QueryFailure>;
