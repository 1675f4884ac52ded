//! # Row Scanners
//!
//! Each scanner walks the whole line once and produces one printed row.
//! The three rows only line up when they are built from the same text.
//!
//! | Input | Upper row | Middle row | Lower row |
//! |-------|-----------|------------|-----------|
//! | unmapped | space | char as UTF-8 | space |
//! | base glyph | space | glyph | space |
//! | upper mark | merged into last cell | - | - |
//! | lower mark | - | - | replaces last cell |
//!
//! `-` means the character takes no cell on that row.

use super::cp20::{self, GlyphClass};
use super::merge::merge_upper;

/// Blank cell on the upper and lower rows
pub const SPACE: u8 = b' ';

/// Row terminator
pub const LF: u8 = b'\n';

/// Output buffer for a single row scan.
#[derive(Debug, Default)]
struct RowBuffer {
    bytes: Vec<u8>,
}

impl RowBuffer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity + 1),
        }
    }

    fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn push_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.bytes
            .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }

    /// Replace the last cell with `f(last)`.
    ///
    /// A mark at the very start of the line has nothing to sit on, so it
    /// becomes a cell of its own.
    fn overwrite_last(&mut self, incoming: u8, f: impl FnOnce(u8, u8) -> u8) {
        match self.bytes.last_mut() {
            Some(last) => *last = f(*last, incoming),
            None => self.bytes.push(incoming),
        }
    }

    fn finish(mut self) -> Vec<u8> {
        self.bytes.push(LF);
        self.bytes
    }
}

fn mapped(ch: char) -> Option<(u8, GlyphClass)> {
    let byte = cp20::lookup(ch);
    if byte.is_none() {
        log::trace!("unmapped character '{}' (U+{:04X})", ch, ch as u32);
    }
    byte.map(|byte| (byte, cp20::classify(byte)))
}

/// Build the row of marks drawn above the base line.
pub fn scan_upper(text: &str) -> Vec<u8> {
    let mut out = RowBuffer::with_capacity(text.len());
    for ch in text.chars() {
        match mapped(ch) {
            None | Some((_, GlyphClass::Base)) => out.push(SPACE),
            Some((byte, GlyphClass::Upper)) => out.overwrite_last(byte, merge_upper),
            Some((_, GlyphClass::Lower)) => {}
        }
    }
    out.finish()
}

/// Build the row of base glyphs. Unmapped characters pass through.
pub fn scan_middle(text: &str) -> Vec<u8> {
    let mut out = RowBuffer::with_capacity(text.len());
    for ch in text.chars() {
        match mapped(ch) {
            None => out.push_char(ch),
            Some((byte, GlyphClass::Base)) => out.push(byte),
            Some((_, GlyphClass::Upper | GlyphClass::Lower)) => {}
        }
    }
    out.finish()
}

/// Build the row of marks drawn below the base line.
pub fn scan_lower(text: &str) -> Vec<u8> {
    let mut out = RowBuffer::with_capacity(text.len());
    for ch in text.chars() {
        match mapped(ch) {
            None | Some((_, GlyphClass::Base)) => out.push(SPACE),
            Some((byte, GlyphClass::Lower)) => out.overwrite_last(byte, |_, incoming| incoming),
            Some((_, GlyphClass::Upper)) => {}
        }
    }
    out.finish()
}

/// Number of cells `text` occupies on the middle row.
pub fn count_cells(text: &str) -> usize {
    text.chars()
        .filter(|&ch| {
            cp20::lookup(ch).is_none_or(|byte| cp20::classify(byte) == GlyphClass::Base)
        })
        .count()
}
