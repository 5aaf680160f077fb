//! Border styles and the glyphs that draw them.
//!
//! Every style provides the same eleven glyphs: edges, corners, the three
//! T-junctions used on the outer frame, and the two T-junctions plus the
//! cross used where row separators meet column separators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Border style for rendered reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    Ascii,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    #[default]
    Light,
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    Heavy,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
}

impl BorderStyle {
    /// Every available style.
    pub const ALL: [BorderStyle; 5] = [
        BorderStyle::Ascii,
        BorderStyle::Light,
        BorderStyle::Heavy,
        BorderStyle::Double,
        BorderStyle::Rounded,
    ];

    /// Identifies the style whose top-left corner is `corner`.
    pub fn detect(corner: char) -> Option<BorderStyle> {
        Self::ALL
            .into_iter()
            .find(|style| style.chars().top_left == corner)
    }

    /// Lowercase name, as accepted by [`FromStr`] and serde.
    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::Ascii => "ascii",
            BorderStyle::Light => "light",
            BorderStyle::Heavy => "heavy",
            BorderStyle::Double => "double",
            BorderStyle::Rounded => "rounded",
        }
    }

    /// Returns `true` if `c` is one of this style's glyphs.
    pub fn is_glyph(&self, c: char) -> bool {
        self.chars().all().contains(&c)
    }

    pub(crate) fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown border style '{s}' (expected one of: ascii, light, heavy, double, rounded)"
                )
            })
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

/// Position of a horizontal line within a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    fn all(&self) -> [char; 11] {
        [
            self.horizontal,
            self.vertical,
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.left_t,
            self.cross,
            self.right_t,
            self.top_t,
            self.bottom_t,
        ]
    }

    /// Junction opening downwards: a column boundary of the row below.
    pub fn opens_down(&self, c: char) -> bool {
        c == self.top_t || c == self.cross
    }

    /// Junction opening upwards: a column boundary of the row above.
    pub fn opens_up(&self, c: char) -> bool {
        c == self.bottom_t || c == self.cross
    }

    /// Draws a horizontal line spanning display columns `0..=right`.
    ///
    /// `above` and `below` hold the inner column boundaries of the rows
    /// the line separates; each boundary gets the junction that connects
    /// to the vertical separators it meets.
    pub fn rule(&self, line: LineType, above: &[usize], below: &[usize], right: usize) -> String {
        let (left_edge, right_edge) = match line {
            LineType::Top => (self.top_left, self.top_right),
            LineType::Middle => (self.left_t, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_right),
        };

        let mut out = String::with_capacity((right + 1) * self.horizontal.len_utf8());
        out.push(left_edge);
        for column in 1..right {
            let glyph = match (above.contains(&column), below.contains(&column)) {
                (true, true) => self.cross,
                (true, false) => self.bottom_t,
                (false, true) => self.top_t,
                (false, false) => self.horizontal,
            };
            out.push(glyph);
        }
        out.push(right_edge);
        out
    }
}
