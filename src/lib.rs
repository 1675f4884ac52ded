//! # Thaiprint - Thai Text for ESC/POS Thermal Printers
//!
//! Thermal printers print one fixed 8-bit glyph per character cell and cannot
//! stack combining marks. Thaiprint renders each line of Thai text as three
//! rows (upper marks, base glyphs, lower marks) in code table 20 ("Thai
//! Code 42") that overlay into readable text when printed without paper
//! advance between them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use thaiprint::{
//!     protocol::commands,
//!     thai,
//!     transport::DeviceTransport,
//! };
//!
//! let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
//!
//! // The printer must be in Thai Code 42 and must not feed between rows
//! transport.write_all(&commands::init())?;
//! transport.write_all(&commands::select_thai_code_table())?;
//! transport.write_all(&commands::line_spacing(0))?;
//!
//! thai::print_thai(&mut transport, "สวัสดีครับ")?;
//!
//! transport.write_all(&commands::default_line_spacing())?;
//! transport.write_all(&commands::feed_lines(3))?;
//!
//! # Ok::<(), thaiprint::error::ThaiPrintError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`thai`] | Three-row Thai rendering |
//! | [`protocol`] | ESC/POS command builders |
//! | [`transport`] | Raw byte sinks |
//! | [`printer`] | Printer profiles |
//! | [`logging`] | Stderr logger for the CLI |
//! | [`error`] | Error types |

pub mod error;
pub mod logging;
pub mod printer;
pub mod protocol;
pub mod thai;
pub mod transport;

// Re-exports for convenience
pub use error::ThaiPrintError;
pub use printer::PrinterConfig;
pub use thai::{ThaiRows, print_thai, render_thai};
pub use transport::{DeviceTransport, RawSink};
