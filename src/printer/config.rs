//! # Printer Configuration
//!
//! Profiles for ESC/POS thermal printers with the Thai code table.
//!
//! ## Supported Profiles
//!
//! | Profile | Paper | Print width | Columns (Font A) |
//! |---------|-------|-------------|------------------|
//! | `80mm` | 80mm | 72mm (576 dots) | 48 |
//! | `58mm` | 58mm | 48mm (384 dots) | 32 |
//!
//! ## Usage
//!
//! ```
//! use thaiprint::printer::PrinterConfig;
//!
//! let config = PrinterConfig::by_name("58mm")?;
//! assert_eq!(config.columns(), 32);
//! # Ok::<(), thaiprint::error::ThaiPrintError>(())
//! ```

use crate::error::ThaiPrintError;
use crate::protocol::commands::THAI_CODE_42;

/// # Printer Configuration
///
/// - **width_dots**: Printable width. Divided by the 12-dot Font A cell it
///   gives [`PrinterConfig::columns`]. Thai rows are not wrapped, so a line
///   wider than that runs off the paper or wraps on the printer and breaks
///   the overlay.
/// - **code_table**: `ESC t` value of the Thai code table on this model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Profile name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub width_dots: u16,

    /// Character code table holding Thai Code 42
    pub code_table: u8,
}

/// Width of one Font A (12×24) cell in dots
pub const FONT_A_CELL_DOTS: u16 = 12;

impl PrinterConfig {
    /// # 80mm Receipt Printer
    ///
    /// ```text
    /// ├── 4mm ──┼────── 72mm printable ──────┼── 4mm ──┤
    /// │ margin  │    576 dots, 48 columns    │ margin  │
    /// ```
    pub const PAPER_80MM: Self = Self {
        name: "80mm",
        width_dots: 576,
        code_table: THAI_CODE_42,
    };

    /// # 58mm Receipt Printer
    ///
    /// 384 dots, 32 columns in Font A.
    pub const PAPER_58MM: Self = Self {
        name: "58mm",
        width_dots: 384,
        code_table: THAI_CODE_42,
    };

    /// All built-in profiles.
    pub const ALL: [Self; 2] = [Self::PAPER_80MM, Self::PAPER_58MM];

    /// Look up a profile by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Self, ThaiPrintError> {
        Self::ALL
            .into_iter()
            .find(|config| config.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                ThaiPrintError::Config(format!(
                    "Unknown printer profile '{}'. Available: {}",
                    name,
                    Self::names().join(", ")
                ))
            })
    }

    /// Names of all built-in profiles.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|config| config.name).collect()
    }

    /// Characters per line in Font A.
    #[inline]
    pub fn columns(&self) -> usize {
        (self.width_dots / FONT_A_CELL_DOTS) as usize
    }

    /// Whether a line of `columns` cells fits within the printable width.
    #[inline]
    pub fn fits(&self, columns: usize) -> bool {
        columns * FONT_A_CELL_DOTS as usize <= self.width_dots as usize
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::PAPER_80MM
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_80mm_dimensions() {
        let config = PrinterConfig::PAPER_80MM;
        assert_eq!(config.width_dots, 576);
        assert_eq!(config.columns(), 48);
    }

    #[test]
    fn test_58mm_dimensions() {
        let config = PrinterConfig::PAPER_58MM;
        assert_eq!(config.columns(), 32);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(PrinterConfig::by_name("80mm").unwrap(), PrinterConfig::PAPER_80MM);
        assert_eq!(PrinterConfig::by_name("58MM").unwrap(), PrinterConfig::PAPER_58MM);
    }

    #[test]
    fn test_unknown_profile() {
        let err = PrinterConfig::by_name("tsp650ii").unwrap_err();
        assert!(matches!(err, ThaiPrintError::Config(_)));
        assert!(err.to_string().contains("80mm, 58mm"));
    }

    #[test]
    fn test_fits() {
        let config = PrinterConfig::PAPER_58MM;
        assert!(config.fits(0));
        assert!(config.fits(32));
        assert!(!config.fits(33));
        assert!(PrinterConfig::PAPER_80MM.fits(33));
    }

    #[test]
    fn test_default_uses_thai_table() {
        assert_eq!(PrinterConfig::default().code_table, 20);
    }
}
