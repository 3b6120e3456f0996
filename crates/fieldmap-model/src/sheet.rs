//! Sheets and the header-row view over them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// One sheet of a workbook: row 0 is the header, the rest are data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// The raw header row, or an empty slice for an empty sheet.
    pub fn header_row(&self) -> &[CellValue] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Header cells rendered as names, unfiltered and aligned by column index.
    pub fn header_names(&self) -> Vec<String> {
        self.header_row().iter().map(ToString::to_string).collect()
    }

    /// Header names with blank cells removed, in original order.
    ///
    /// This is the list presented to a user when a source is opened.
    pub fn fields(&self) -> Vec<String> {
        self.header_row()
            .iter()
            .filter(|cell| !cell.is_blank())
            .map(ToString::to_string)
            .collect()
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or_default()
    }

    pub fn data_row_count(&self) -> usize {
        self.data_rows().len()
    }

    /// Column index of the first header cell named exactly `field`.
    pub fn column_index(&self, field: &str) -> Option<usize> {
        self.header_row()
            .iter()
            .position(|cell| !cell.is_blank() && cell.to_string() == field)
    }

    /// Cell at `(row, column)` of the data rows; short rows yield `Empty`.
    pub fn data_cell(&self, row: usize, column: usize) -> CellValue {
        self.data_rows()
            .get(row)
            .and_then(|cells| cells.get(column))
            .cloned()
            .map(CellValue::or_empty)
            .unwrap_or_default()
    }
}

/// The result of opening a source file: its path and presentable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFields {
    pub path: PathBuf,
    pub fields: Vec<String>,
}
