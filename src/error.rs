//! Error types for MargaNav.
//!
//! Only construction-time failures are errors. "No path found" is a normal
//! search outcome (an empty [`Path`](crate::Path)), and a superseded search
//! result is silently dropped by the session rather than surfaced.

use thiserror::Error;

/// MargaNav error type.
#[derive(Error, Debug)]
pub enum NavError {
    /// Grid source data is empty or has inconsistent row lengths.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// A cell reference is outside the grid dimensions.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// Referenced row.
        row: usize,
        /// Referenced column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// I/O failure while reading grid or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file failed to parse or validate.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::MalformedGrid(e.to_string())
    }
}

/// Convenience result alias for MargaNav operations.
pub type Result<T> = std::result::Result<T, NavError>;
