//! Saving a table to disk.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use fieldmap_model::OutputTable;

use crate::delimited::encode_csv;
use crate::error::{OutputError, Result};
use crate::format::OutputFormat;
use crate::xlsx::encode_xlsx;

/// Encode `table` in the given format.
pub fn encode_table(table: &OutputTable, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Xlsx => encode_xlsx(table),
        OutputFormat::Csv => encode_csv(table),
    }
}

/// Save `table` at `path`, format chosen from the extension.
pub fn write_table(path: &Path, table: &OutputTable) -> Result<OutputFormat> {
    let format = OutputFormat::for_path(path)?;
    write_table_as(path, table, format)?;
    Ok(format)
}

/// Save `table` at `path` in `format`.
///
/// The file is encoded in memory, written to a temporary file beside the
/// target, then renamed over it. A failure leaves any existing file intact.
/// An overwritten file keeps its permissions; a new one gets the process
/// default.
pub fn write_table_as(path: &Path, table: &OutputTable, format: OutputFormat) -> Result<()> {
    let bytes = encode_table(table, format)?;
    debug!(path = %path.display(), %format, bytes = bytes.len(), "encoded output");

    let temp_path = temp_path_for(path);
    if let Err(source) = write_and_rename(&temp_path, path, &bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "saved output"
    );
    Ok(())
}

fn write_and_rename(temp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(bytes)?;
    if let Ok(existing) = fs::metadata(path) {
        file.set_permissions(existing.permissions())?;
    }
    file.sync_all()?;
    fs::rename(temp_path, path)
}

/// `out.xlsx` is staged as `.out.xlsx.tmp` in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
