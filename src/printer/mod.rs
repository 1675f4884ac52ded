//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Paper width profiles and Thai code table numbers

pub mod config;

pub use config::PrinterConfig;
