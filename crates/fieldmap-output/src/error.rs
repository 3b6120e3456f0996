use std::path::PathBuf;

use thiserror::Error;

/// Errors from encoding or saving an output table.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unsupported output format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("table too large for a worksheet: {0}")]
    TooLarge(String),

    #[error("failed to encode workbook")]
    Xlsx {
        #[from]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("failed to encode csv")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
