//! Request and response shapes of the workbench boundary.
//!
//! Every boundary call answers with one of these discriminated values; no
//! error crosses the boundary any other way. Field names follow the camelCase
//! wire contract used by front ends.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::sheet::SourceFields;

/// User-facing messages shown by front ends.
pub mod messages {
    pub const PARSE_FAILED: &str = "Failed to parse file. Is it a valid Excel file?";
    pub const PREVIEW_INPUTS_REQUIRED: &str = "File path and field name are required.";
    pub const PREVIEW_FAILED: &str = "Failed to read or parse file for preview.";
    pub const NO_MAPPINGS: &str = "No fields have been mapped for transfer.";
    pub const SAVE_CANCELLED: &str = "Save was canceled.";
    pub const TRANSFER_FAILED: &str = "An error occurred during the data transfer process.";

    pub fn field_not_found(field: &str) -> String {
        format!("Field '{field}' not found in the file.")
    }

    pub fn saved_to(path: &std::path::Path) -> String {
        format!("Data successfully saved to {}", path.display())
    }
}

/// Answer to an open-source request. Cancellation is `None` at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpenSourceResponse {
    Opened(SourceFields),
    Failed { error: String },
}

impl OpenSourceResponse {
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Opened(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub file_path: PathBuf,
    pub field_name: String,
}

impl PreviewRequest {
    pub fn new(file_path: impl Into<PathBuf>, field_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            field_name: field_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviewResponse {
    Data { data: Vec<CellValue> },
    Failed { error: String },
}

impl PreviewResponse {
    pub fn data(&self) -> Option<&[CellValue]> {
        match self {
            Self::Data { data } => Some(data),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Data { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// Answer to a transfer request.
///
/// `Finished { success: false }` is a neutral outcome (the save dialog was
/// cancelled); `Failed` is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransferResponse {
    Finished { success: bool, message: String },
    Failed { error: String },
}

impl TransferResponse {
    pub fn saved(path: &Path) -> Self {
        Self::Finished {
            success: true,
            message: messages::saved_to(path),
        }
    }

    pub fn cancelled() -> Self {
        Self::Finished {
            success: false,
            message: messages::SAVE_CANCELLED.to_string(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Finished { success: true, .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Finished { success: false, .. })
    }

    /// The message to show, whichever variant this is.
    pub fn message(&self) -> &str {
        match self {
            Self::Finished { message, .. } => message,
            Self::Failed { error } => error,
        }
    }
}
