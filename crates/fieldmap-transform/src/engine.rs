//! Building the output table for a transfer.

use std::path::Path;

use tracing::{debug, info};

use fieldmap_ingest::read_first_sheet;
use fieldmap_model::{FieldMapping, OutputTable, Sheet, validate_mappings};

use crate::error::Result;
use crate::plan::TransferPlan;

/// Read the mappings' shared source file and build the output table.
///
/// Mapping structure is checked before the file is opened, so an empty or
/// mixed-source list never touches the filesystem. The result is built fully
/// in memory.
pub fn transfer_table(mappings: &[FieldMapping]) -> Result<OutputTable> {
    let source_path = validate_mappings(mappings)?;
    let sheet = read_first_sheet(source_path)?;
    build_from_sheet(source_path, &sheet, mappings)
}

/// Build the output table from an already-read source sheet.
pub fn build_output_table(sheet: &Sheet, mappings: &[FieldMapping]) -> Result<OutputTable> {
    let source_path = validate_mappings(mappings)?;
    build_from_sheet(source_path, sheet, mappings)
}

fn build_from_sheet(
    source_path: &Path,
    sheet: &Sheet,
    mappings: &[FieldMapping],
) -> Result<OutputTable> {
    let plan = TransferPlan::resolve(source_path, sheet, mappings)?;
    debug!(
        source = %source_path.display(),
        columns = ?plan.columns,
        "resolved transfer columns"
    );
    let table = apply_plan(&plan, sheet);
    info!(
        source = %source_path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "built transfer table"
    );
    Ok(table)
}

/// One output row per source data row, columns in plan order.
pub fn apply_plan(plan: &TransferPlan, sheet: &Sheet) -> OutputTable {
    let mut table = OutputTable::new(plan.header.clone());
    table.rows.reserve(sheet.data_row_count());
    for row in 0..sheet.data_row_count() {
        table.push_row(
            plan.columns
                .iter()
                .map(|&column| sheet.data_cell(row, column))
                .collect(),
        );
    }
    table
}
