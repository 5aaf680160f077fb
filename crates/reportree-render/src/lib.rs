//! Box-drawn text rendering for reportree reports.
//!
//! [`format`] draws a [`Column`](reportree::Column) as nested grids and
//! [`parse`] reads that drawing back. For reports whose leaves satisfy the
//! round-trip conditions below, `parse(&format(&c)) == c` holds in every
//! [`BorderStyle`].
//!
//! # Round-trip conditions
//!
//! Leaf text must not:
//!
//! - end a line with whitespace, or end with a newline
//! - contain control characters other than `\n`
//! - start with a top-left corner glyph
//! - start a line with a zero-width character
//! - contain `|` when drawn in [`BorderStyle::Ascii`]
//!
//! ASCII grids draw every junction as `+`, so a `|` inside a cell that
//! stretches past a neighbour's column boundary reads the same as a
//! separator. The Unicode styles tell the junctions apart and tolerate
//! their own vertical glyph inside leaves.
//!
//! # Example
//!
//! ```rust
//! use reportree::{Column, Row};
//! use reportree_render::{format_with, BorderStyle, RenderOptions};
//!
//! let report = Column::rows(vec![
//!     Row::new(vec![Column::leaf("A"), Column::leaf("True")])?,
//!     Row::new(vec![Column::leaf("B"), Column::leaf("False")])?,
//! ]);
//!
//! let options = RenderOptions::new().style(BorderStyle::Ascii);
//! assert_eq!(
//!     format_with(&report, &options),
//!     "+---+-------+\n\
//!      | A | True  |\n\
//!      +---+-------+\n\
//!      | B | False |\n\
//!      +---+-------+"
//! );
//! # Ok::<(), reportree::ReportError>(())
//! ```

mod border;
mod error;
mod format;
mod options;
mod parse;
mod width;

pub use border::BorderStyle;
pub use error::{ParseError, Result};
pub use format::{format, format_with, Formatter};
pub use options::RenderOptions;
pub use parse::parse;
pub use width::{display_width, pad_right};
