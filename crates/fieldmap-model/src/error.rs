use std::path::PathBuf;

use thiserror::Error;

/// Missing or inconsistent request inputs, caught before any file I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no fields have been mapped for transfer")]
    NoMappings,
    #[error("file path is required")]
    MissingFilePath,
    #[error("field name is required")]
    MissingFieldName,
    #[error("mapping {index} has no source path")]
    MissingSourcePath { index: usize },
    #[error("mapping {index} has no source field")]
    MissingSourceField { index: usize },
    #[error("mapping {index} has no destination field")]
    MissingDestField { index: usize },
    #[error(
        "all mappings must share one source file: expected {}, found {}",
        expected.display(),
        found.display()
    )]
    MixedSources { expected: PathBuf, found: PathBuf },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
