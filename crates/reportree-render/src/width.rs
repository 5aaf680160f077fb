//! Display-width helpers.
//!
//! Widths are measured per character with `unicode-width`: wide characters
//! take two terminal columns, combining marks take none. Both the formatter
//! and the parser measure text this way, so a rendered grid always reads
//! back with the same column positions.

use unicode_width::UnicodeWidthChar;

/// Returns the display width of a single character.
///
/// Control characters count as zero columns.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Returns the display width of a string.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Pads a string on the right with spaces to reach the target display width.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Returns the widest display width among the lines of a block.
pub(crate) fn block_width(lines: &[String]) -> usize {
    lines.iter().map(|line| display_width(line)).max().unwrap_or(0)
}

/// A line of text split into display columns.
///
/// Each entry holds the text occupying one terminal column. A wide
/// character fills its first column and leaves an empty continuation entry
/// in the second; zero-width characters join the entry before them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Line {
    number: usize,
    cells: Vec<String>,
}

impl Line {
    /// Splits `text` into display columns. `number` is the 1-based line
    /// number used in error reports.
    pub fn new(number: usize, text: &str) -> Self {
        let mut cells: Vec<String> = Vec::with_capacity(text.len());
        for c in text.chars() {
            match char_width(c) {
                0 => match cells.last_mut() {
                    Some(last) => last.push(c),
                    None => cells.push(c.to_string()),
                },
                1 => cells.push(c.to_string()),
                _ => {
                    cells.push(c.to_string());
                    cells.push(String::new());
                }
            }
        }
        Line { number, cells }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// The character alone in `column`, if that column holds exactly one.
    pub fn glyph(&self, column: usize) -> Option<char> {
        let cell = self.cells.get(column)?;
        let mut chars = cell.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// Columns `start..end`, keeping the line number.
    pub fn slice(&self, start: usize, end: usize) -> Line {
        let end = end.min(self.cells.len());
        let start = start.min(end);
        Line {
            number: self.number,
            cells: self.cells[start..end].to_vec(),
        }
    }

    /// Drops trailing blank columns.
    pub fn trim_end(mut self) -> Line {
        while self.cells.last().is_some_and(|cell| cell == " ") {
            self.cells.pop();
        }
        self
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell == " ")
    }

    pub fn text(&self) -> String {
        self.cells.concat()
    }
}
