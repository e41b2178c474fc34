//! Error types for data operations.
//!
//! Provides unified error handling for all loading and parsing
//! operations. None of these are fatal: the application surfaces them
//! inline and keeps the previously loaded dataset on screen.

use thiserror::Error;

pub use crate::constants::{MAX_FILE_SIZE_MB, MAX_TABLE_ROWS};

/// Errors that can occur while loading a tabular source
#[derive(Error, Debug)]
pub enum DataError {
    /// File extension is not one of csv/tsv/json/xlsx/xls/sql
    #[error("Unsupported file type: {extension}")]
    UnsupportedFormat { extension: String },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Spreadsheet error from calamine
    #[error("Spreadsheet error: {0}")]
    Excel(#[from] calamine::Error),

    /// SQL error from rusqlite
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// File is too large for eager loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows for eager loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// No columns found in data
    #[error("No columns found")]
    NoColumns,

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::Other(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::Other(s.to_string())
    }
}
