use std::fmt;
use std::path::Path;

use crate::error::{OutputError, Result};

/// File format of a saved transfer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xlsx" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Pick the format from `path`'s extension.
    ///
    /// A path with no extension is written as xlsx.
    pub fn for_path(path: &Path) -> Result<Self> {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return Ok(Self::Xlsx);
        };
        Self::from_extension(extension).ok_or_else(|| OutputError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
