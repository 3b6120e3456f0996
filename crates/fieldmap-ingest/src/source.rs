//! Opening a source file and previewing one of its columns.

use std::path::Path;

use tracing::debug;

use fieldmap_model::{CellValue, PREVIEW_ROWS, Preview, Sheet, SourceFields};

use crate::error::{IngestError, Result};
use crate::workbook::read_first_sheet;

/// Read the header of `path`'s first sheet, dropping blank header cells.
pub fn open_source(path: &Path) -> Result<SourceFields> {
    let sheet = read_first_sheet(path)?;
    let fields = sheet.fields();
    debug!(path = %path.display(), field_count = fields.len(), "opened source");
    Ok(SourceFields {
        path: path.to_path_buf(),
        fields,
    })
}

/// Sample the first [`PREVIEW_ROWS`] values of `field` in `path`.
///
/// The file is re-read on every call. The field is matched exactly against
/// the unfiltered header row; the first occurrence wins.
pub fn preview_field(path: &Path, field: &str) -> Result<Preview> {
    let sheet = read_first_sheet(path)?;
    preview_sheet(&sheet, field).ok_or_else(|| IngestError::FieldNotFound {
        field: field.to_string(),
        path: path.to_path_buf(),
    })
}

/// Preview `field` from an already-read sheet, or `None` if it is absent.
///
/// Falsy cells (zero, NaN, `false`) are shown as empty.
pub fn preview_sheet(sheet: &Sheet, field: &str) -> Option<Preview> {
    let column = sheet.column_index(field)?;
    let values: Vec<CellValue> = (0..sheet.data_row_count().min(PREVIEW_ROWS))
        .map(|row| sheet.data_cell(row, column))
        .map(|cell| if cell.is_falsy() { CellValue::Empty } else { cell })
        .collect();
    Some(Preview {
        field: field.to_string(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_sheet(count: usize) -> Sheet {
        let names = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace"];
        let mut rows: Vec<Vec<CellValue>> = vec![vec!["ID".into(), "Name".into()]];
        for (index, name) in names.iter().take(count).enumerate() {
            rows.push(vec![CellValue::from(index as i64 + 1), (*name).into()]);
        }
        Sheet::new("Sheet1", rows)
    }

    #[test]
    fn preview_caps_at_five_rows() {
        let preview = preview_sheet(&names_sheet(6), "Name").unwrap();
        let values: Vec<String> = preview.values.iter().map(ToString::to_string).collect();
        assert_eq!(values, vec!["Alice", "Bob", "Charlie", "David", "Eve"]);
    }

    #[test]
    fn preview_of_short_sheet_returns_all_rows() {
        let preview = preview_sheet(&names_sheet(2), "Name").unwrap();
        assert_eq!(preview.len(), 2);
    }

    #[test]
    fn preview_of_missing_field_is_none() {
        assert!(preview_sheet(&names_sheet(3), "Email").is_none());
        assert!(preview_sheet(&names_sheet(3), "name").is_none());
    }

    #[test]
    fn preview_fills_missing_cells() {
        let sheet = Sheet::new(
            "Sheet1",
            vec![
                vec!["ID".into(), "Name".into()],
                vec![CellValue::from(1i64)],
                vec![CellValue::from(2i64), CellValue::text("")],
            ],
        );
        let preview = preview_sheet(&sheet, "Name").unwrap();
        assert_eq!(preview.values, vec![CellValue::Empty, CellValue::Empty]);
    }

    #[test]
    fn preview_shows_falsy_cells_as_empty() {
        let sheet = Sheet::new(
            "Sheet1",
            vec![
                vec!["A".into()],
                vec![CellValue::from(0i64)],
                vec![CellValue::from(false)],
                vec![CellValue::Number(f64::NAN)],
                vec![CellValue::from(true)],
                vec![CellValue::text("0")],
            ],
        );
        let preview = preview_sheet(&sheet, "A").unwrap();
        assert_eq!(
            preview.values,
            vec![
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Empty,
                CellValue::Bool(true),
                CellValue::text("0"),
            ]
        );
    }
}
