//! Integration tests reading real `.xlsx` files.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use fieldmap_ingest::{IngestError, open_source, preview_field, read_first_sheet};
use fieldmap_model::CellValue;

/// Write a two-sheet workbook; only the first sheet should ever be read.
fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("source.xlsx");
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Customers").unwrap();
    sheet.write_string(0, 0, "ID").unwrap();
    // column 1 has no header
    sheet.write_string(0, 2, "Name").unwrap();
    sheet.write_string(0, 3, "Value").unwrap();
    let names = ["Alice", "Bob", "Charlie", "David", "Eve", "Frank"];
    for (index, name) in names.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, f64::from(row)).unwrap();
        sheet.write_string(row, 2, *name).unwrap();
        if index != 2 {
            sheet.write_number(row, 3, f64::from(row * 100)).unwrap();
        }
    }

    let other = workbook.add_worksheet();
    other.set_name("Ignored").unwrap();
    other.write_string(0, 0, "Other").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[test]
fn open_source_filters_blank_headers() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path());

    let source = open_source(&path).unwrap();

    assert_eq!(source.path, path);
    assert_eq!(source.fields, vec!["ID", "Name", "Value"]);
}

#[test]
fn first_sheet_is_read_with_numbers_intact() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path());

    let sheet = read_first_sheet(&path).unwrap();

    assert_eq!(sheet.name, "Customers");
    assert_eq!(sheet.data_row_count(), 6);
    assert_eq!(sheet.data_cell(0, 0), CellValue::Number(1.0));
    assert_eq!(sheet.data_cell(1, 2), CellValue::text("Bob"));
}

#[test]
fn preview_returns_first_five_values() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path());

    let preview = preview_field(&path, "Name").unwrap();

    assert_eq!(
        preview.values,
        vec![
            CellValue::text("Alice"),
            CellValue::text("Bob"),
            CellValue::text("Charlie"),
            CellValue::text("David"),
            CellValue::text("Eve"),
        ]
    );
}

#[test]
fn preview_renders_missing_cells_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path());

    let preview = preview_field(&path, "Value").unwrap();

    assert_eq!(preview.len(), 5);
    assert_eq!(preview.values[2], CellValue::Empty);
    assert_eq!(preview.values[4], CellValue::Number(500.0));
}

#[test]
fn preview_shows_zero_and_false_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flags.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "A").unwrap();
    sheet.write_number(1, 0, 0.0).unwrap();
    sheet.write_boolean(2, 0, false).unwrap();
    sheet.write_number(3, 0, 7.0).unwrap();
    workbook.save(&path).unwrap();

    let preview = preview_field(&path, "A").unwrap();
    assert_eq!(
        preview.values,
        vec![CellValue::Empty, CellValue::Empty, CellValue::Number(7.0)]
    );

    let sheet = read_first_sheet(&path).unwrap();
    assert_eq!(sheet.data_cell(0, 0), CellValue::Number(0.0));
    assert_eq!(sheet.data_cell(1, 0), CellValue::Bool(false));
}

#[test]
fn preview_of_unknown_field_is_field_not_found() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path());

    let error = preview_field(&path, "Email").unwrap_err();

    assert!(error.is_field_not_found());
    assert!(error.to_string().contains("Email"));
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let error = open_source(Path::new("/nowhere/notes.txt")).unwrap_err();
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn empty_workbook_sheet_has_no_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(&path).unwrap();

    let source = open_source(&path).unwrap();

    assert!(source.fields.is_empty());
}
