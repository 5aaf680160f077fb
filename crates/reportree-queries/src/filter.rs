//! String filters over a field of the source.
//!
//! A [`FieldFilter`] pairs a field accessor with an [`Op`] and a pattern,
//! and decides whether a source passes. It is the usual predicate of a
//! [`SourcedRow`](crate::SourcedRow).

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{QueryFailure, Result};

/// Comparison operator for a field filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact match).
    Eq,
    /// Not equal.
    Ne,
    /// Field contains the pattern.
    Contains,
    /// Field starts with the pattern.
    StartsWith,
    /// Field ends with the pattern.
    EndsWith,
    /// Field matches the pattern as a regular expression.
    Regex,
}

impl Op {
    /// Every operator, in the order they are listed in help text.
    pub const ALL: [Op; 6] = [
        Op::Eq,
        Op::Ne,
        Op::Contains,
        Op::StartsWith,
        Op::EndsWith,
        Op::Regex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Contains => "contains",
            Op::StartsWith => "starts-with",
            Op::EndsWith => "ends-with",
            Op::Regex => "regex",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Op {
    type Err = QueryFailure;

    fn from_str(s: &str) -> Result<Self> {
        Op::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| QueryFailure::UnknownOp(s.to_string()))
    }
}

#[derive(Debug, Clone)]
enum Pattern {
    Text(String),
    Regex(Regex),
}

/// A predicate comparing one string field of the source against a pattern.
///
/// # Example
///
/// ```
/// use reportree_queries::{FieldFilter, Op};
///
/// let filter = FieldFilter::<String>::new(|name: &String| name.clone(), Op::EndsWith, ".rs")?;
/// assert!(filter.matches(&"main.rs".to_string()));
/// assert!(!filter.matches(&"Cargo.toml".to_string()));
/// # Ok::<(), reportree_queries::QueryFailure>(())
/// ```
pub struct FieldFilter<S> {
    field: fn(&S) -> String,
    op: Op,
    pattern: Pattern,
}

impl<S> FieldFilter<S> {
    /// Creates a filter. Regex patterns are compiled here.
    pub fn new(field: fn(&S) -> String, op: Op, pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let pattern = match op {
            Op::Regex => Pattern::Regex(Regex::new(&pattern)?),
            _ => Pattern::Text(pattern),
        };
        Ok(FieldFilter { field, op, pattern })
    }

    /// Parses an `<op>:<value>` expression, such as `starts-with:src`.
    pub fn parse(field: fn(&S) -> String, expression: &str) -> Result<Self> {
        let (op, pattern) = expression
            .split_once(':')
            .ok_or_else(|| QueryFailure::InvalidFilter(expression.to_string()))?;
        FieldFilter::new(field, op.parse()?, pattern)
    }

    pub fn op(&self) -> Op {
        self.op
    }

    /// Returns `true` if the source's field satisfies the filter.
    pub fn matches(&self, source: &S) -> bool {
        let field = (self.field)(source);
        match &self.pattern {
            Pattern::Regex(regex) => regex.is_match(&field),
            Pattern::Text(pattern) => match self.op {
                Op::Eq => field == *pattern,
                Op::Ne => field != *pattern,
                Op::Contains => field.contains(pattern.as_str()),
                Op::StartsWith => field.starts_with(pattern.as_str()),
                Op::EndsWith => field.ends_with(pattern.as_str()),
                Op::Regex => false,
            },
        }
    }
}

impl<S> Clone for FieldFilter<S> {
    fn clone(&self) -> Self {
        FieldFilter {
            field: self.field,
            op: self.op,
            pattern: self.pattern.clone(),
        }
    }
}

impl<S> fmt::Debug for FieldFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldFilter")
            .field("op", &self.op)
            .field("pattern", &self.pattern)
            .finish()
    }
}
