//! Column resolution for a mapping list.
//!
//! Each mapping's source field is resolved to a column index exactly once,
//! before any row is touched.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fieldmap_model::{FieldMapping, Sheet, dest_header};

use crate::error::{Result, TransferError};

/// Header name to column index. Blank header cells are not indexed.
///
/// When a name repeats, the first occurrence wins, matching preview lookups.
pub fn header_lookup(header: &[String]) -> HashMap<&str, usize> {
    let mut lookup = HashMap::with_capacity(header.len());
    for (index, name) in header.iter().enumerate() {
        if name.is_empty() {
            continue;
        }
        lookup.entry(name.as_str()).or_insert(index);
    }
    lookup
}

/// Resolved columns for a validated mapping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub source_path: PathBuf,
    /// Destination names, in mapping order.
    pub header: Vec<String>,
    /// Source column index for each output column.
    pub columns: Vec<usize>,
}

impl TransferPlan {
    /// Resolve `mappings` against `sheet`'s header.
    ///
    /// Fails with [`TransferError::FieldNotFound`] on the first source field
    /// the header does not contain.
    pub fn resolve(source_path: &Path, sheet: &Sheet, mappings: &[FieldMapping]) -> Result<Self> {
        let names = sheet.header_names();
        let lookup = header_lookup(&names);
        let columns = mappings
            .iter()
            .map(|mapping| {
                lookup.get(mapping.source_field()).copied().ok_or_else(|| {
                    TransferError::FieldNotFound {
                        field: mapping.source_field().to_string(),
                        path: source_path.to_path_buf(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            source_path: source_path.to_path_buf(),
            header: dest_header(mappings),
            columns,
        })
    }
}
