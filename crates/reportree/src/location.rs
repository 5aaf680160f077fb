//! Addressing cells inside a materialized report.
//!
//! A [`Location`] starts at the root column and descends one
//! (row, column) step per nesting level. It renders as
//! `root/r1c0/r0c2` and parses back from the same form.

use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// One nesting step: a row of the current column, then a column of that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub row: usize,
    pub column: usize,
}

/// Path from the root of a report to one of its columns.
///
/// # Example
///
/// ```
/// use reportree::Location;
///
/// let location = Location::root().nest(1, 0).nest(0, 2);
/// assert_eq!(location.to_string(), "root/r1c0/r0c2");
/// assert_eq!("root/r1c0/r0c2".parse::<Location>()?, location);
/// # Ok::<(), reportree::ReportError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    steps: Vec<Step>,
}

impl Location {
    /// The root marker: addresses the report column itself.
    pub fn root() -> Self {
        Location::default()
    }

    /// Descends into column `column` of row `row`.
    pub fn nest(mut self, row: usize, column: usize) -> Self {
        self.steps.push(Step { row, column });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of nesting steps below the root.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// The location one level up, or `None` at the root.
    pub fn parent(&self) -> Option<Location> {
        let (_, rest) = self.steps.split_last()?;
        Some(Location {
            steps: rest.to_vec(),
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for step in &self.steps {
            write!(f, "/r{}c{}", step.row, step.column)?;
        }
        Ok(())
    }
}

impl FromStr for Location {
    type Err = ReportError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ReportError::InvalidLocation {
            input: input.to_string(),
            reason,
        };

        let mut parts = input.split('/');
        if parts.next() != Some("root") {
            return Err(invalid("must start with 'root'"));
        }

        let mut location = Location::root();
        for part in parts {
            let rest = part
                .strip_prefix('r')
                .ok_or_else(|| invalid("step must look like r<row>c<column>"))?;
            let (row, column) = rest
                .split_once('c')
                .ok_or_else(|| invalid("step must look like r<row>c<column>"))?;
            let row = row.parse().map_err(|_| invalid("row index is not a number"))?;
            let column = column
                .parse()
                .map_err(|_| invalid("column index is not a number"))?;
            location = location.nest(row, column);
        }
        Ok(location)
    }
}
