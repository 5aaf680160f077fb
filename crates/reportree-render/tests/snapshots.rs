//! Snapshot tests for rendered reports.

use insta::assert_snapshot;
use reportree::{Column, Row};
use reportree_render::{format, format_with, parse, BorderStyle, RenderOptions};

fn leaf(text: &str) -> Column {
    Column::leaf(text)
}

fn table(rows: Vec<Vec<Column>>) -> Column {
    Column::rows(rows.into_iter().map(|cells| Row::new(cells).unwrap()))
}

fn styled(column: &Column, style: BorderStyle) -> String {
    format_with(column, &RenderOptions::new().style(style))
}

/// Renders, checks the rendering reads back unchanged, and returns it.
fn render(column: &Column, style: BorderStyle) -> String {
    let output = styled(column, style);
    assert_eq!(&parse(&output).unwrap(), column);
    output
}

#[test]
fn flat_table() {
    let report = table(vec![
        vec![leaf("A"), leaf("True")],
        vec![leaf("B"), leaf("False")],
    ]);
    let output = render(&report, BorderStyle::Light);
    assert_eq!(output, format(&report));
    assert_snapshot!("flat_table", output);
}

#[test]
fn ascii_table() {
    let report = table(vec![
        vec![leaf("A"), leaf("True")],
        vec![leaf("B"), leaf("False")],
    ]);
    assert_snapshot!("ascii_table", render(&report, BorderStyle::Ascii));
}

#[test]
fn nested_table() {
    let report = table(vec![
        vec![leaf("A"), leaf("x")],
        vec![leaf("B"), table(vec![vec![leaf("1")], vec![leaf("2")]])],
    ]);
    assert_snapshot!("nested_table", render(&report, BorderStyle::Light));
}

#[test]
fn ragged_rows() {
    let report = table(vec![
        vec![leaf("name"), leaf("size"), leaf("kind")],
        vec![leaf("a.txt"), leaf("12"), leaf("file")],
        vec![leaf("notes")],
    ]);
    assert_snapshot!("ragged_rows", render(&report, BorderStyle::Light));
}

#[test]
fn multi_line_and_wide_cells() {
    let report = table(vec![
        vec![leaf("title"), leaf("line one\nline two")],
        vec![leaf("日本"), leaf("ok")],
    ]);
    assert_snapshot!("multi_line_and_wide_cells", render(&report, BorderStyle::Double));
}

#[test]
fn empty_nested_rows() {
    let report = table(vec![vec![leaf("A"), Column::rows(vec![])]]);
    assert_snapshot!("empty_nested_rows", render(&report, BorderStyle::Rounded));
}

#[test]
fn deep_nesting() {
    let inner = table(vec![vec![leaf("z")]]);
    let middle = table(vec![vec![leaf("y"), inner]]);
    let report = table(vec![vec![leaf("x"), middle]]);
    assert_snapshot!("deep_nesting", render(&report, BorderStyle::Heavy));
}
