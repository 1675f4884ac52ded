//! # ESC/POS Protocol Support
//!
//! Low-level command builders for ESC/POS thermal printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Initialization, code table, line spacing, feed and cut
//!
//! ## Usage Example
//!
//! ```
//! use thaiprint::protocol::commands;
//! use thaiprint::thai;
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::select_thai_code_table());
//! data.extend(commands::line_spacing(0));
//! data.extend(thai::render_thai("สวัสดี").to_bytes());
//! data.extend(commands::default_line_spacing());
//! data.extend(commands::feed_lines(3));
//!
//! // Send `data` to printer via transport...
//! ```

pub mod commands;
