//! # Error Types
//!
//! This module defines error types used throughout the thaiprint library.
//!
//! Rendering Thai text never fails; these errors come from the collaborators
//! around it (transports, printer profiles, CLI output).

use thiserror::Error;

/// Main error type for thaiprint operations
#[derive(Debug, Error)]
pub enum ThaiPrintError {
    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unknown printer profile or bad option combination
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
