//! Rendering reports as box-drawn text.
//!
//! A leaf renders as its text, unframed. A rows value renders as a grid:
//! every row is a horizontal band, every cell is framed by vertical
//! separators and padded with one space on each side. Nested grids render
//! inside their cell with the same border style.
//!
//! Rows may hold different numbers of cells. Cell `j` lines up across all
//! rows; the last cell of a shorter row stretches to the right edge.
//!
//! ```text
//! ┌───┬───────┐
//! │ A │ True  │
//! ├───┼───────┤
//! │ B │ ┌───┐ │
//! │   │ │ 1 │ │
//! │   │ └───┘ │
//! └───┴───────┘
//! ```
//!
//! An empty rows value renders as a closed box with no interior.

use reportree::{Column, Row};
use tracing::debug;

use crate::border::{BorderChars, BorderStyle, LineType};
use crate::options::RenderOptions;
use crate::width::{block_width, pad_right};

/// Renders reports with a fixed border style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Formatter {
    style: BorderStyle,
}

impl Formatter {
    pub fn new(style: BorderStyle) -> Self {
        Formatter { style }
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Formatter::new(options.style)
    }

    pub fn style(&self) -> BorderStyle {
        self.style
    }

    /// Renders `column` to text. Lines are joined with `\n`, without a
    /// trailing newline.
    pub fn format(&self, column: &Column) -> String {
        debug!(style = %self.style, depth = column.depth(), "formatting report");
        self.block(column).join("\n")
    }

    fn block(&self, column: &Column) -> Vec<String> {
        column.content().fold_ref(
            |rows| self.grid(rows),
            |leaf| leaf.split('\n').map(str::to_string).collect(),
        )
    }

    fn grid(&self, rows: &[Row]) -> Vec<String> {
        let chars = self.style.chars();
        if rows.is_empty() {
            return vec![
                chars.rule(LineType::Top, &[], &[], 1),
                chars.rule(LineType::Bottom, &[], &[], 1),
            ];
        }

        let cells: Vec<Vec<Vec<String>>> = rows
            .iter()
            .map(|row| row.columns().iter().map(|column| self.block(column)).collect())
            .collect();
        let edges = layout(&cells);
        let right = edges[edges.len() - 1];

        // Inner column boundaries of each band.
        let bounds: Vec<&[usize]> = cells.iter().map(|row| &edges[1..row.len()]).collect();

        let mut lines = vec![chars.rule(LineType::Top, &[], bounds[0], right)];
        for (index, row) in cells.iter().enumerate() {
            if index > 0 {
                lines.push(chars.rule(LineType::Middle, bounds[index - 1], bounds[index], right));
            }
            band(&chars, row, bounds[index], right, &mut lines);
        }
        lines.push(chars.rule(LineType::Bottom, bounds[bounds.len() - 1], &[], right));
        lines
    }
}

/// Positions of the vertical separators of a full-width row, from the
/// left edge at 0 to the right edge.
fn layout(cells: &[Vec<Vec<String>>]) -> Vec<usize> {
    let count = cells.iter().map(Vec::len).max().unwrap_or(0);

    // Spanning cells are left out here and fitted below.
    let mut widths = vec![0; count];
    for row in cells {
        for (index, block) in row.iter().enumerate() {
            if index + 1 < row.len() || row.len() == count {
                widths[index] = widths[index].max(block_width(block));
            }
        }
    }

    let edges = positions(&widths);
    let right = edges[count];
    let deficit = cells
        .iter()
        .filter(|row| row.len() < count)
        .filter_map(|row| {
            let start = edges[row.len() - 1];
            let available = right - start - 3;
            row.last().map(|block| block_width(block).saturating_sub(available))
        })
        .max()
        .unwrap_or(0);

    if let Some(last) = widths.last_mut() {
        *last += deficit;
    }
    positions(&widths)
}

fn positions(widths: &[usize]) -> Vec<usize> {
    let mut edges = Vec::with_capacity(widths.len() + 1);
    let mut position = 0;
    edges.push(position);
    for width in widths {
        position += width + 3;
        edges.push(position);
    }
    edges
}

/// Appends the content lines of one row.
fn band(chars: &BorderChars, row: &[Vec<String>], bounds: &[usize], right: usize, lines: &mut Vec<String>) {
    let mut edges = Vec::with_capacity(bounds.len() + 2);
    edges.push(0);
    edges.extend_from_slice(bounds);
    edges.push(right);

    let height = row.iter().map(Vec::len).max().unwrap_or(1);
    for line_index in 0..height {
        let mut line = String::new();
        line.push(chars.vertical);
        for (block, cell) in row.iter().zip(edges.windows(2)) {
            let text = block.get(line_index).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(&pad_right(text, cell[1] - cell[0] - 3));
            line.push(' ');
            line.push(chars.vertical);
        }
        lines.push(line);
    }
}

/// Renders `column` with the default options.
pub fn format(column: &Column) -> String {
    Formatter::default().format(column)
}

/// Renders `column` with the given options.
pub fn format_with(column: &Column, options: &RenderOptions) -> String {
    Formatter::from_options(options).format(column)
}
