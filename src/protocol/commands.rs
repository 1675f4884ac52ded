//! # ESC/POS Printer Commands
//!
//! Command builders the caller sends around Thai text: initialization, code
//! table selection, line spacing control, paper feed and cutting.
//!
//! None of these are issued by [`crate::thai`] itself. Rendering only
//! produces glyph bytes; preparing the printer is the caller's job.
//!
//! ## Typical Sequence
//!
//! ```text
//! ESC @          initialize
//! ESC t 20 CR    select Thai Code 42
//! ESC 3 0        no paper advance on LF
//! <upper> <middle> <lower>
//! ESC 2          default line spacing
//! ESC d n        feed n lines
//! GS V 66 n      feed and partial cut
//! ```
//!
//! ## Byte Order
//!
//! All parameters used here are single bytes.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance by the line spacing
pub const LF: u8 = 0x0A;

/// CR (Carriage Return)
pub const CR: u8 = 0x0D;

/// Character code table 20: Thai Character Code 42
pub const THAI_CODE_42: u8 = 20;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets modes to their power-on defaults.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Note
///
/// Resetting also drops the selected code table on most printers, so send
/// [`select_thai_code_table`] after this.
///
/// ## Example
///
/// ```
/// use thaiprint::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CHARACTER CODE TABLE
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// Selects which glyphs the printer uses for bytes 128–255.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
/// | Decimal | 27 116 n |
#[inline]
pub fn select_code_table(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

/// # Select Character Code Table, CR Terminated (ESC t n CR)
///
/// The form Thai-capable printers document for switching code tables. Use
/// this with a profile's `code_table` when a model numbers the Thai table
/// differently.
#[inline]
pub fn select_code_table_cr(n: u8) -> Vec<u8> {
    let mut out = select_code_table(n);
    out.push(CR);
    out
}

/// # Select Thai Code 42 (ESC t 20 CR)
///
/// The sequence that switches supported printers into the code table
/// expected by [`crate::thai`].
///
/// ## Example
///
/// ```
/// use thaiprint::protocol::commands;
///
/// assert_eq!(commands::select_thai_code_table(), vec![27, 116, 20, 13]);
/// ```
#[inline]
pub fn select_thai_code_table() -> Vec<u8> {
    select_code_table_cr(THAI_CODE_42)
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the paper advance for each LF to `n` motion units.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 3 n |
/// | Hex     | 1B 33 n |
/// | Decimal | 27 51 n |
///
/// ## Thai Overlay
///
/// With `n = 0` the three rows of a Thai line print on top of each other.
///
/// ```
/// use thaiprint::protocol::commands;
///
/// assert_eq!(commands::line_spacing(0), vec![0x1B, 0x33, 0x00]);
/// ```
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

/// # Default Line Spacing (ESC 2)
///
/// Restores the printer's default line spacing (about 4.23mm).
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

// ============================================================================
// PAPER FEED AND CUT
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC d n |
/// | Hex     | 1B 64 n |
/// | Decimal | 27 100 n |
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Feed and Partial Cut (GS V 66 n)
///
/// Feeds the paper to the cutter position plus `n` motion units, then
/// performs a partial cut.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS V B n |
/// | Hex     | 1D 56 42 n |
/// | Decimal | 29 86 66 n |
#[inline]
pub fn cut_partial_feed(n: u8) -> Vec<u8> {
    vec![GS, b'V', 66, n]
}

// ============================================================================
// TESTS
// ============================================================================
