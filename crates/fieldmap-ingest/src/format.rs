//! Spreadsheet format detection from file extensions.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// File formats the reader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Xlsm,
    Xlsb,
    Xls,
    Ods,
    Csv,
}

impl SheetFormat {
    /// All formats, in the order offered by file pickers.
    pub const ALL: [SheetFormat; 6] = [
        SheetFormat::Xlsx,
        SheetFormat::Xls,
        SheetFormat::Xlsm,
        SheetFormat::Xlsb,
        SheetFormat::Ods,
        SheetFormat::Csv,
    ];

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "xlsx" => Some(Self::Xlsx),
            "xlsm" => Some(Self::Xlsm),
            "xlsb" => Some(Self::Xlsb),
            "xls" => Some(Self::Xls),
            "ods" => Some(Self::Ods),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xlsm => "xlsm",
            Self::Xlsb => "xlsb",
            Self::Xls => "xls",
            Self::Ods => "ods",
            Self::Csv => "csv",
        }
    }

    /// True for formats handled by the workbook reader rather than CSV.
    pub fn is_workbook(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

impl fmt::Display for SheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
