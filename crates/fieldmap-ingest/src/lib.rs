//! Reading source spreadsheets.
//!
//! Only the first sheet of a file is ever used. Row 0 is the header; the
//! remaining rows are data aligned to it by column index.

pub mod error;
pub mod format;
pub mod source;
pub mod workbook;

pub use error::{IngestError, Result};
pub use format::SheetFormat;
pub use source::{open_source, preview_field, preview_sheet};
pub use workbook::{parse_first_sheet, read_first_sheet};
