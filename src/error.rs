//! Error types for the nonogram model and its persistence layer

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, editing, loading or saving a puzzle
#[derive(Error, Debug)]
pub enum Error {
    /// Row or column count is missing, malformed or less than 1
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Cell access outside the grid
    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The document ended (or a data line was too short) before the grid was complete.
    /// `line` is 1-based.
    #[error("Unexpected end of input at line {line}")]
    UnexpectedEndOfInput { line: usize },

    /// Reading or writing a puzzle file failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Invalid startup configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StorageError(err.to_string())
    }
}
