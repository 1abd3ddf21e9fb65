//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing numeric input
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid number '{token}' on line {line}: {source}")]
    InvalidNumber {
        token: String,
        line: usize,
        source: std::num::ParseFloatError,
    },

    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
