use crate::cell::CellValue;

/// The assembled result of a transfer: destination header plus data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl OutputTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Data rows, header excluded.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header row followed by data rows, as written to the output sheet.
    pub fn to_grid(&self) -> Vec<Vec<CellValue>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.header.iter().cloned().map(CellValue::text).collect());
        grid.extend(self.rows.iter().cloned());
        grid
    }
}
