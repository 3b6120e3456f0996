//! Output writers for transfer tables.
//!
//! - **xlsx**: one worksheet named [`SHEET_NAME`], header in the first row
//! - **csv**: comma separated, header first
//!
//! Saves go through a temporary file in the target directory so a failed
//! write never leaves a partial file behind.

mod delimited;
mod error;
mod format;
mod writer;
mod xlsx;

pub use delimited::encode_csv;
pub use error::{OutputError, Result};
pub use format::OutputFormat;
pub use writer::{encode_table, write_table, write_table_as};
pub use xlsx::{SHEET_NAME, encode_xlsx};

/// File name offered when asking where to save a transfer.
pub const DEFAULT_OUTPUT_NAME: &str = "data-transfer-output.xlsx";
