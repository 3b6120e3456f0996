use fieldmap_model::{CellValue, OutputTable};

use crate::error::{OutputError, Result};

/// Encode `table` as comma separated text, header first.
pub fn encode_csv(table: &OutputTable) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(render))?;
    }
    writer
        .into_inner()
        .map_err(|err| OutputError::Csv { source: err.into_error().into() })
}

fn render(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => String::new(),
        other => other.to_string(),
    }
}
