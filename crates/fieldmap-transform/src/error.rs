use std::path::PathBuf;

use thiserror::Error;

use fieldmap_ingest::IngestError;
use fieldmap_model::ValidationError;

/// Errors from building a transfer table.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Mapping list failed structural checks; no I/O was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The source file could not be read.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A mapping names a field the source header does not have.
    #[error("source field '{field}' not found in {}", path.display())]
    FieldNotFound { field: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TransferError>;
