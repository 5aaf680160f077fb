//! Subcommand implementations.

use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use reportree::{project_to_rows, Column, QueryError};
use reportree_queries::{Counter, Field, FieldFilter, Literal, Nested, SourcedRow, StaticRow};
use reportree_render::{format_with, parse, BorderStyle, ParseError, RenderOptions};
use tracing::{debug, info};

use crate::entry::{Entry, Kind};

/// Options for [`dir_report`].
#[derive(Debug, Clone)]
pub struct DirOptions {
    /// Nesting levels; 1 lists only the root's children.
    pub max_depth: usize,
    pub header: bool,
    /// Applied to entry names at every level.
    pub filter: Option<FieldFilter<Entry>>,
}

impl Default for DirOptions {
    fn default() -> Self {
        DirOptions {
            max_depth: 3,
            header: true,
            filter: None,
        }
    }
}

fn entry_name(entry: &Entry) -> String {
    entry.name().to_string()
}

fn entry_kind(entry: &Entry) -> String {
    entry.kind().to_string()
}

/// Parses an `<op>:<value>` filter over entry names.
pub fn name_filter(expression: &str) -> Result<FieldFilter<Entry>> {
    FieldFilter::parse(entry_name, expression).with_context(|| format!("invalid filter '{expression}'"))
}

fn query_failed(err: QueryError) -> anyhow::Error {
    anyhow!(err)
}

/// Rows for the entries at `depth`, nesting the next level inside each.
///
/// A row only accepts entries at its own depth. The nested sequence of a
/// file or an empty directory is evaluated against that entry itself,
/// which this rejects, so such cells hold an empty table.
fn level<'q>(depth: usize, options: &DirOptions, counter: Option<&'q mut Counter>) -> SourcedRow<'q, Entry> {
    let filter = options.filter.clone();
    let mut row = SourcedRow::when(move |entry: &Entry| {
        entry.depth() == depth && filter.as_ref().map_or(true, |filter| filter.matches(entry))
    });
    if let Some(counter) = counter {
        row = row.column(counter);
    }
    row = row.column(Field::new(entry_name)).column(Field::new(entry_kind));
    if depth < options.max_depth {
        row = row.column(Nested::new().row(level(depth + 1, options, None)));
    }
    row
}

fn header(options: &DirOptions) -> StaticRow<'static, Entry> {
    let mut row = StaticRow::new()
        .column(Literal::new("#"))
        .column(Literal::new("name"))
        .column(Literal::new("kind"));
    if options.max_depth > 1 {
        row = row.column(Literal::new("contents"));
    }
    row
}

/// Projects the directory tree under `root`.
pub fn dir_report(root: &Path, options: &DirOptions) -> Result<Column> {
    ensure!(options.max_depth > 0, "max depth must be at least 1");
    let root = Entry::open(root).with_context(|| format!("cannot open {}", root.display()))?;
    ensure!(
        root.kind() == Kind::Dir,
        "{} is not a directory",
        root.path().display()
    );
    debug!(path = %root.path().display(), max_depth = options.max_depth, "building directory report");

    let mut rows = Vec::new();
    if options.header {
        let mut heading = header(options);
        rows.extend(project_to_rows(root.clone(), &mut [&mut heading]).map_err(query_failed)?);
    }

    let mut counter = Counter::new(1, 1);
    let mut entries = level(1, options, Some(&mut counter));
    rows.extend(project_to_rows(root, &mut [&mut entries]).map_err(query_failed)?);
    drop(entries);

    info!(entries = counter.issued(), "directory report built");
    Ok(Column::rows(rows))
}

/// Renders a report with the given border style.
pub fn render(column: &Column, style: BorderStyle) -> String {
    format_with(column, &RenderOptions::new().style(style))
}

/// Parses a rendered report and serializes it as pretty-printed JSON.
pub fn to_json(text: &str) -> Result<String> {
    let column = parse(text)?;
    Ok(serde_json::to_string_pretty(&column)?)
}

/// Result of [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Style the text was re-rendered with.
    pub style: BorderStyle,
    /// Whether re-rendering reproduced the text exactly.
    pub fixed_point: bool,
}

/// Parses `text` and renders it again in the style it was drawn with.
///
/// Text that is not a grid is re-rendered in `fallback`. Trailing newlines
/// are not significant.
pub fn check(text: &str, fallback: BorderStyle) -> std::result::Result<CheckOutcome, ParseError> {
    let column = parse(text)?;
    let style = text
        .chars()
        .next()
        .and_then(BorderStyle::detect)
        .unwrap_or(fallback);
    let fixed_point = render(&column, style) == text.trim_end_matches('\n');
    debug!(style = %style, fixed_point, "checked report");
    Ok(CheckOutcome { style, fixed_point })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_depth() {
        let mut shallow = header(&DirOptions {
            max_depth: 1,
            ..DirOptions::default()
        });
        let mut deep = header(&DirOptions::default());
        assert_eq!(reportree::RowQuery::<Entry>::column_queries(&mut shallow).len(), 3);
        assert_eq!(reportree::RowQuery::<Entry>::column_queries(&mut deep).len(), 4);
    }

    #[test]
    fn check_detects_fixed_point() {
        let outcome = check("┌───┐\n│ a │\n└───┘\n", BorderStyle::Ascii).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome {
                style: BorderStyle::Light,
                fixed_point: true
            }
        );
    }

    #[test]
    fn check_detects_drift() {
        // Parses fine, but the formatter would not pad the cell this wide.
        let outcome = check("┌────┐\n│ a  │\n└────┘", BorderStyle::Light).unwrap();
        assert!(!outcome.fixed_point);
    }

    #[test]
    fn check_plain_text_uses_fallback() {
        let outcome = check("just text", BorderStyle::Double).unwrap();
        assert_eq!(outcome.style, BorderStyle::Double);
        assert!(outcome.fixed_point);
    }

    #[test]
    fn json_of_parsed_report() {
        let json = to_json("┌───┬───┐\n│ a │ b │\n└───┴───┘").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([["a", "b"]]));
    }

    #[test]
    fn bad_filter_expression() {
        let err = name_filter("like:x").unwrap_err();
        assert_eq!(err.to_string(), "invalid filter 'like:x'");
    }
}
