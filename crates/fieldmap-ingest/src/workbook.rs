//! First-sheet reading for workbook and CSV files.
//!
//! Every call reads the file fresh; nothing is cached between calls.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use csv::ReaderBuilder;
use tracing::{debug, warn};

use fieldmap_model::{CellValue, Sheet};

use crate::error::{IngestError, Result};
use crate::format::SheetFormat;

/// Read `path` and return its first sheet.
pub fn read_first_sheet(path: &Path) -> Result<Sheet> {
    let format = SheetFormat::detect(path)?;
    let bytes = read_bytes(path)?;
    let sheet = parse_first_sheet(path, bytes, format)?;
    debug!(
        path = %path.display(),
        format = %format,
        sheet = %sheet.name,
        rows = sheet.rows.len(),
        "read first sheet"
    );
    Ok(sheet)
}

/// Parse already-loaded bytes. `path` is used for error context and, for
/// CSV input, the sheet name.
pub fn parse_first_sheet(path: &Path, bytes: Vec<u8>, format: SheetFormat) -> Result<Sheet> {
    if format.is_workbook() {
        parse_workbook(path, bytes)
    } else {
        parse_csv(path, &bytes)
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

fn parse_workbook(path: &Path, bytes: Vec<u8>) -> Result<Sheet> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
    let no_sheets = || IngestError::NoSheets {
        path: path.to_path_buf(),
    };
    let name = workbook.sheet_names().first().cloned().ok_or_else(no_sheets)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(no_sheets)?
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    Ok(Sheet::new(name, rows))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::text(value.as_str()),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        // Date cells keep their serial number; no coercion.
        Data::DateTime(value) => CellValue::Number(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::text(value.as_str()),
        Data::Error(error) => {
            warn!(error = %error, "error cell read as empty");
            CellValue::Empty
        }
    }
}

fn parse_csv(path: &Path, bytes: &[u8]) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|value| CellValue::text(value.trim_start_matches('\u{feff}')))
                .collect(),
        );
    }
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    Ok(Sheet::new(name, rows))
}
