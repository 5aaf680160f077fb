//! Error types for report parsing.

use thiserror::Error;

/// Errors that can occur while reading a rendered report back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a well-formed rendering.
    #[error("malformed report at line {line}: {reason}")]
    MalformedReport { line: usize, reason: &'static str },
}

impl ParseError {
    pub(crate) fn malformed(line: usize, reason: &'static str) -> Self {
        ParseError::MalformedReport { line, reason }
    }

    /// The 1-based line the problem was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedReport { line, .. } => *line,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
