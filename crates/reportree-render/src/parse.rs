//! Reading rendered reports back into columns.
//!
//! Parsing inverts [`format`](crate::format()): text whose first column
//! opens with a top-left corner is read as a grid in the matching border
//! style, anything else is a leaf. Inside a grid, each band between two
//! horizontal lines is a row, and its column boundaries are the positions
//! where a junction opens into the band from both sides and every content
//! line holds a vertical separator. Every horizontal line is then checked
//! against the line the formatter would draw for the boundaries found, so
//! misaligned or torn grids are rejected rather than misread.
//!
//! Trailing spaces on a line are ignored. Cells are read the way the
//! formatter writes them: one space of padding on each side, trailing
//! blanks dropped, trailing empty lines dropped.

use reportree::{Column, Row};
use tracing::{debug, trace};

use crate::border::{BorderChars, BorderStyle, LineType};
use crate::error::{ParseError, Result};
use crate::width::Line;

/// Parses rendered text back into a column.
///
/// # Example
///
/// ```
/// use reportree::{Column, Row};
/// use reportree_render::{format, parse};
///
/// let column = Column::rows(vec![Row::new(vec![Column::leaf("A"), Column::leaf("True")])?]);
/// assert_eq!(parse(&format(&column))?, column);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(text: &str) -> Result<Column> {
    let lines: Vec<Line> = text
        .lines()
        .enumerate()
        .map(|(index, line)| Line::new(index + 1, line).trim_end())
        .collect();

    let style = lines
        .first()
        .and_then(|line| line.glyph(0))
        .and_then(BorderStyle::detect)
        .unwrap_or_default();
    debug!(lines = lines.len(), style = %style, "parsing report");

    Parser {
        chars: style.chars(),
    }
    .block(lines)
}

struct Parser {
    chars: BorderChars,
}

impl Parser {
    /// Reads a block of lines as a grid or a leaf.
    fn block(&self, mut lines: Vec<Line>) -> Result<Column> {
        while lines.last().is_some_and(Line::is_blank) {
            lines.pop();
        }

        match lines.first().and_then(|line| line.glyph(0)) {
            Some(corner) if corner == self.chars.top_left => Ok(Column::rows(self.grid(&lines)?)),
            _ => {
                let text: Vec<String> = lines.iter().map(Line::text).collect();
                Ok(Column::leaf(text.join("\n")))
            }
        }
    }

    fn grid(&self, lines: &[Line]) -> Result<Vec<Row>> {
        let chars = &self.chars;
        let (top, bottom) = match lines {
            [top, .., bottom] => (top, bottom),
            [only] => return Err(ParseError::malformed(only.number(), "box is not closed")),
            [] => return Ok(Vec::new()),
        };

        let width = top.width();
        if width < 2 {
            return Err(ParseError::malformed(top.number(), "box is too narrow"));
        }
        if let Some(line) = lines.iter().find(|line| line.width() != width) {
            return Err(ParseError::malformed(line.number(), "line width differs from the box"));
        }
        let right = width - 1;
        if top.glyph(right) != Some(chars.top_right) {
            return Err(ParseError::malformed(top.number(), "top border is not closed"));
        }
        if bottom.glyph(0) != Some(chars.bottom_left) || bottom.glyph(right) != Some(chars.bottom_right) {
            return Err(ParseError::malformed(bottom.number(), "box is not closed"));
        }

        // Split the interior into bands separated by horizontal lines.
        let mut rules = vec![top];
        let mut bands: Vec<Vec<&Line>> = Vec::new();
        let mut current: Vec<&Line> = Vec::new();
        for line in &lines[1..lines.len() - 1] {
            match line.glyph(0) {
                Some(c) if c == chars.left_t => {
                    if current.is_empty() {
                        return Err(ParseError::malformed(line.number(), "separator without a row above"));
                    }
                    if line.glyph(right) != Some(chars.right_t) {
                        return Err(ParseError::malformed(line.number(), "separator is not closed"));
                    }
                    bands.push(std::mem::take(&mut current));
                    rules.push(line);
                }
                Some(c) if c == chars.vertical => {
                    if line.glyph(right) != Some(chars.vertical) {
                        return Err(ParseError::malformed(line.number(), "row is not closed"));
                    }
                    current.push(line);
                }
                _ => return Err(ParseError::malformed(line.number(), "expected a row or a separator")),
            }
        }
        if current.is_empty() {
            if !bands.is_empty() {
                return Err(ParseError::malformed(bottom.number(), "separator without a row below"));
            }
        } else {
            bands.push(current);
        }
        rules.push(bottom);
        if bands.is_empty() && width != 2 {
            return Err(ParseError::malformed(top.number(), "box without rows has an interior"));
        }

        let bounds: Vec<Vec<usize>> = bands
            .iter()
            .enumerate()
            .map(|(index, band)| self.boundaries(rules[index], band, rules[index + 1], right))
            .collect();

        for (index, rule) in rules.iter().enumerate() {
            let above: &[usize] = index
                .checked_sub(1)
                .and_then(|above| bounds.get(above))
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let below: &[usize] = bounds.get(index).map(Vec::as_slice).unwrap_or(&[]);
            let line_type = if index == 0 {
                LineType::Top
            } else if index == rules.len() - 1 {
                LineType::Bottom
            } else {
                LineType::Middle
            };
            if rule.text() != chars.rule(line_type, above, below, right) {
                return Err(ParseError::malformed(rule.number(), "border does not match the column layout"));
            }
        }

        trace!(rows = bands.len(), width, "grid layout read");
        bands
            .iter()
            .zip(&bounds)
            .map(|(band, bounds)| self.row(band, bounds, right))
            .collect()
    }

    fn boundaries(&self, above: &Line, band: &[&Line], below: &Line, right: usize) -> Vec<usize> {
        let chars = &self.chars;
        (1..right)
            .filter(|&column| {
                above.glyph(column).is_some_and(|c| chars.opens_down(c))
                    && below.glyph(column).is_some_and(|c| chars.opens_up(c))
                    && band.iter().all(|line| line.glyph(column) == Some(chars.vertical))
            })
            .collect()
    }

    fn row(&self, band: &[&Line], bounds: &[usize], right: usize) -> Result<Row> {
        let mut edges = Vec::with_capacity(bounds.len() + 2);
        edges.push(0);
        edges.extend_from_slice(bounds);
        edges.push(right);

        let first = band.first().map(|line| line.number()).unwrap_or_default();
        let mut columns = Vec::with_capacity(edges.len() - 1);
        for cell in edges.windows(2) {
            let (start, end) = (cell[0], cell[1]);
            if end - start < 3 {
                return Err(ParseError::malformed(first, "cell is too narrow for its padding"));
            }

            let mut block = Vec::with_capacity(band.len());
            for line in band {
                if line.glyph(start + 1) != Some(' ') || line.glyph(end - 1) != Some(' ') {
                    return Err(ParseError::malformed(line.number(), "cell padding is missing"));
                }
                block.push(line.slice(start + 2, end - 1).trim_end());
            }
            columns.push(self.block(block)?);
        }

        Row::new(columns).map_err(|_| ParseError::malformed(first, "row has no cells"))
    }
}
