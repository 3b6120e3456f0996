//! Error types for spreadsheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a source spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the file's bytes.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Extension is not one of the supported spreadsheet formats.
    #[error("unsupported file type '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Workbook bytes could not be parsed.
    #[error("failed to parse workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// CSV bytes could not be parsed.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook parsed but contains no sheets.
    #[error("workbook has no sheets: {path}")]
    NoSheets { path: PathBuf },

    // === Lookup Errors ===
    /// Requested field is absent from the header row.
    #[error("field '{field}' not found in {path}")]
    FieldNotFound { field: String, path: PathBuf },
}

impl IngestError {
    /// True for the lookup failure, as opposed to read/parse failures.
    pub fn is_field_not_found(&self) -> bool {
        matches!(self, Self::FieldNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
