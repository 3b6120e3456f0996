//! Workbook encoding.

use rust_xlsxwriter::{Workbook, Worksheet};

use fieldmap_model::{CellValue, OutputTable};

use crate::error::{OutputError, Result};

/// Name of the single worksheet in every saved workbook.
pub const SHEET_NAME: &str = "Transferred Data";

/// Encode `table` as an xlsx workbook with one worksheet.
///
/// The header is row 0. Empty cells are left unwritten.
pub fn encode_xlsx(table: &OutputTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row, cells) in table.to_grid().iter().enumerate() {
        let row = u32::try_from(row)
            .map_err(|_| OutputError::TooLarge(format!("{} rows", table.row_count() + 1)))?;
        for (column, cell) in cells.iter().enumerate() {
            let column = u16::try_from(column)
                .map_err(|_| OutputError::TooLarge(format!("{} columns", table.column_count())))?;
            write_cell(worksheet, row, column, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(worksheet: &mut Worksheet, row: u32, column: u16, cell: &CellValue) -> Result<()> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(value) => {
            worksheet.write_string(row, column, value)?;
        }
        CellValue::Number(value) => {
            worksheet.write_number(row, column, *value)?;
        }
        CellValue::Bool(value) => {
            worksheet.write_boolean(row, column, *value)?;
        }
    }
    Ok(())
}
