pub mod cell;
pub mod error;
pub mod mapping;
pub mod preview;
pub mod response;
pub mod sheet;
pub mod table;

pub use cell::{CellValue, format_number};
pub use error::{Result, ValidationError};
pub use mapping::{DestRef, FieldMapping, SourceRef, dest_header, validate_mappings};
pub use preview::{PREVIEW_ROWS, Preview};
pub use response::{
    OpenSourceResponse, PreviewRequest, PreviewResponse, TransferResponse, messages,
};
pub use sheet::{Sheet, SourceFields};
pub use table::OutputTable;
