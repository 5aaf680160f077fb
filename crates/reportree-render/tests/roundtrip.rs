//! Format/parse round trips and malformed input handling.

use proptest::prelude::*;
use reportree::{Column, Row};
use reportree_render::{display_width, format_with, parse, BorderStyle, ParseError, RenderOptions};

// ============================================================================
// Strategies
// ============================================================================

/// ASCII junctions all draw as `+`, so `|` only survives in the Unicode
/// styles, which also get their own vertical glyph inside leaves.
fn leaf_line(style: BorderStyle) -> impl Strategy<Value = String> {
    match style {
        BorderStyle::Ascii => "[ ]{0,2}[a-z0-9日-]{0,2}[a-z0-9日]",
        _ => "[ ]{0,2}[a-z0-9日|│║┃-]{0,2}[a-z0-9日]",
    }
}

fn leaf_text(style: BorderStyle) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::collection::vec(leaf_line(style), 1..4).prop_map(|lines| lines.join("\n")),
    ]
}

fn column(style: BorderStyle) -> impl Strategy<Value = Column> {
    leaf_text(style).prop_map(Column::leaf).prop_recursive(4, 32, 4, |inner| {
        prop::collection::vec(prop::collection::vec(inner, 1..4), 0..4).prop_map(|rows| {
            Column::rows(rows.into_iter().map(|cells| Row::new(cells).unwrap()))
        })
    })
}

fn style() -> impl Strategy<Value = BorderStyle> {
    prop::sample::select(BorderStyle::ALL.to_vec())
}

fn styled_column() -> impl Strategy<Value = (BorderStyle, Column)> {
    style().prop_flat_map(|style| (Just(style), column(style)))
}

// ============================================================================
// Round trip
// ============================================================================

proptest! {
    #[test]
    fn parse_inverts_format((style, column) in styled_column()) {
        let text = format_with(&column, &RenderOptions::new().style(style));
        prop_assert_eq!(parse(&text).unwrap(), column);
    }

    #[test]
    fn grid_lines_share_one_width((style, column) in styled_column()) {
        prop_assume!(column.is_rows());
        let text = format_with(&column, &RenderOptions::new().style(style));
        let widths: Vec<usize> = text.lines().map(display_width).collect();
        prop_assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

// ============================================================================
// Malformed input
// ============================================================================

fn malformed(text: &str) -> ParseError {
    parse(text).unwrap_err()
}

#[test]
fn empty_box_with_interior_is_rejected() {
    let err = malformed("┌─┐\n└─┘");
    assert_eq!(
        err,
        ParseError::MalformedReport {
            line: 1,
            reason: "box without rows has an interior"
        }
    );
}

#[test]
fn ragged_line_is_rejected() {
    let err = malformed("┌───┐\n│ x\n└───┘");
    assert_eq!(
        err,
        ParseError::MalformedReport {
            line: 2,
            reason: "line width differs from the box"
        }
    );
}

#[test]
fn torn_column_is_rejected() {
    let err = malformed("┌───┬───┐\n│ a │ b │\n└───────┘");
    assert_eq!(
        err,
        ParseError::MalformedReport {
            line: 1,
            reason: "border does not match the column layout"
        }
    );
}

#[test]
fn missing_padding_is_rejected() {
    let err = malformed("┌───┐\n│xx │\n└───┘");
    assert_eq!(
        err,
        ParseError::MalformedReport {
            line: 2,
            reason: "cell padding is missing"
        }
    );
}

#[test]
fn separator_needs_rows_on_both_sides() {
    assert_eq!(malformed("┌───┐\n├───┤\n│ a │\n└───┘").line(), 2);
    assert_eq!(malformed("┌───┐\n│ a │\n├───┤\n└───┘").line(), 4);
}

#[test]
fn mixed_styles_are_rejected() {
    let err = malformed("┌───┐\n│ a │\n╚═══╝");
    assert_eq!(
        err,
        ParseError::MalformedReport {
            line: 3,
            reason: "box is not closed"
        }
    );
}

#[test]
fn nested_errors_report_the_outer_line() {
    let err = malformed("┌───────┐\n│ ┌───┐ │\n│ │ 1   │\n└───────┘");
    assert_eq!(
        err,
        ParseError::MalformedReport {
            line: 3,
            reason: "line width differs from the box"
        }
    );
}

#[test]
fn text_after_the_box_is_rejected() {
    let err = malformed("┌───┐\n│ a │\n└───┘\ntrailing");
    assert_eq!(err.line(), 4);
}
