//! Source-to-destination field mappings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A field in a specific source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub path: PathBuf,
    pub field_name: String,
}

/// A field in the destination schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestRef {
    pub field_name: String,
}

/// One drawn connection: copy `source` into the column named by `dest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMapping {
    pub source: SourceRef,
    pub dest: DestRef,
}

impl FieldMapping {
    pub fn new(
        path: impl Into<PathBuf>,
        source_field: impl Into<String>,
        dest_field: impl Into<String>,
    ) -> Self {
        Self {
            source: SourceRef {
                path: path.into(),
                field_name: source_field.into(),
            },
            dest: DestRef {
                field_name: dest_field.into(),
            },
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source.path
    }

    pub fn source_field(&self) -> &str {
        &self.source.field_name
    }

    pub fn dest_field(&self) -> &str {
        &self.dest.field_name
    }
}

/// Check the structural requirements of a mapping list before any I/O.
///
/// The list must be non-empty, every mapping must name a source path, a
/// source field and a destination field, and all mappings must share the
/// first mapping's source path. Returns that shared path.
pub fn validate_mappings(mappings: &[FieldMapping]) -> Result<&Path, ValidationError> {
    let first = mappings.first().ok_or(ValidationError::NoMappings)?;
    for (index, mapping) in mappings.iter().enumerate() {
        if mapping.source.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingSourcePath { index });
        }
        if mapping.source.field_name.is_empty() {
            return Err(ValidationError::MissingSourceField { index });
        }
        if mapping.dest.field_name.is_empty() {
            return Err(ValidationError::MissingDestField { index });
        }
        if mapping.source.path != first.source.path {
            return Err(ValidationError::MixedSources {
                expected: first.source.path.clone(),
                found: mapping.source.path.clone(),
            });
        }
    }
    Ok(first.source_path())
}

/// Destination field names in mapping order.
pub fn dest_header(mappings: &[FieldMapping]) -> Vec<String> {
    mappings
        .iter()
        .map(|mapping| mapping.dest.field_name.clone())
        .collect()
}
