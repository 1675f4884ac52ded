//! # Thai Text Rendering
//!
//! ESC/POS printers in code table 20 print one fixed glyph per cell and have
//! no way to stack combining marks. Thai text is therefore printed as three
//! rows that the printer overlays without advancing the paper:
//!
//! ```text
//! กุ้ง      cell 0   cell 1   LF
//! upper     225      32      10    mai tho above ก
//! middle    161      165     10    ก ง
//! lower     215      32      10    sara u below ก
//! ```
//!
//! ## Module Structure
//!
//! - [`cp20`]: Unicode to code table 20 mapping and glyph classification
//! - [`merge`]: Combined glyphs for stacked upper marks
//! - [`scan`]: The three row scanners
//!
//! ## Printer Preconditions
//!
//! The caller is responsible for:
//! - switching the printer to code table 20 (see
//!   [`crate::protocol::commands::select_thai_code_table`])
//! - making sure the paper does not advance between the three rows (see
//!   [`crate::protocol::commands::line_spacing`])
//! - wrapping text to the printer's column count
//!
//! ## Example
//!
//! ```
//! use thaiprint::thai;
//!
//! let rows = thai::render_thai("กุ");
//! assert_eq!(rows.upper, vec![b' ', b'\n']);
//! assert_eq!(rows.middle, vec![161, b'\n']);
//! assert_eq!(rows.lower, vec![215, b'\n']);
//! ```

pub mod cp20;
pub mod merge;
pub mod scan;

use serde::Serialize;

use crate::error::ThaiPrintError;
use crate::transport::RawSink;

pub use scan::{scan_lower, scan_middle, scan_upper};

/// The three printed rows of one line of Thai text.
///
/// Every row ends with a single `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThaiRows {
    pub upper: Vec<u8>,
    pub middle: Vec<u8>,
    pub lower: Vec<u8>,
    #[serde(skip)]
    columns: usize,
}

impl ThaiRows {
    /// Rows in the order they must be sent to the printer.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        [
            self.upper.as_slice(),
            self.middle.as_slice(),
            self.lower.as_slice(),
        ]
        .into_iter()
    }

    /// Printed width of the line in cells, as laid out on the middle row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All three rows concatenated, ready for a single write.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.upper.len() + self.middle.len() + self.lower.len());
        for row in self.iter() {
            out.extend_from_slice(row);
        }
        out
    }
}

/// Render one line of text into its upper, middle and lower rows.
///
/// The text is expected to be a single, already wrapped line. Characters
/// outside code table 20 pass through on the middle row and leave blank
/// cells above and below.
pub fn render_thai(text: &str) -> ThaiRows {
    ThaiRows {
        upper: scan_upper(text),
        middle: scan_middle(text),
        lower: scan_lower(text),
        columns: scan::count_cells(text),
    }
}

/// Render `text` and write the rows to `sink` as three separate writes,
/// upper first.
///
/// The printer must already be in code table 20 and must not feed paper
/// between the writes. Stops at the first failed write.
pub fn print_thai<S: RawSink + ?Sized>(sink: &mut S, text: &str) -> Result<(), ThaiPrintError> {
    let rows = render_thai(text);
    log::debug!(
        "printing line of {} cells ({} chars)",
        rows.columns(),
        text.chars().count()
    );
    for row in rows.iter() {
        sink.write_raw(row)?;
    }
    Ok(())
}
