//! The request/response boundary.
//!
//! Each operation converts internal failures into a response value carrying
//! a user-facing message. Details go to the log, never across the boundary.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use fieldmap_ingest::SheetFormat;
use fieldmap_model::{
    FieldMapping, OpenSourceResponse, OutputTable, PreviewRequest, PreviewResponse,
    TransferResponse, messages,
};
use fieldmap_output::{write_table, write_table_as};
use fieldmap_transform::transfer_table;

use crate::dialog::{DialogOutcome, FileDialog};
use crate::options::TransferOptions;

/// Stateless service behind every front end.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    options: TransferOptions,
}

impl Workbench {
    pub fn new(options: TransferOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TransferOptions {
        &self.options
    }

    /// Ask for a source file and read its header.
    ///
    /// `None` means the user cancelled; that is not an error.
    pub fn open_source(&self, dialog: &mut dyn FileDialog) -> Option<OpenSourceResponse> {
        let extensions: Vec<&str> = SheetFormat::ALL.iter().map(|f| f.extension()).collect();
        let DialogOutcome::Selected(path) = dialog.pick_source(&extensions) else {
            debug!("open source cancelled");
            return None;
        };
        Some(self.open_path(&path))
    }

    /// Read the header of a source file the caller already chose.
    pub fn open_path(&self, path: &Path) -> OpenSourceResponse {
        match fieldmap_ingest::open_source(path) {
            Ok(source) => {
                info!(path = %path.display(), fields = source.fields.len(), "source opened");
                OpenSourceResponse::Opened(source)
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to open source");
                OpenSourceResponse::Failed {
                    error: messages::PARSE_FAILED.to_string(),
                }
            }
        }
    }

    /// Up to five values of one source column.
    pub fn preview_field(&self, request: &PreviewRequest) -> PreviewResponse {
        if request.file_path.as_os_str().is_empty() || request.field_name.is_empty() {
            return PreviewResponse::Failed {
                error: messages::PREVIEW_INPUTS_REQUIRED.to_string(),
            };
        }
        match fieldmap_ingest::preview_field(&request.file_path, &request.field_name) {
            Ok(preview) => PreviewResponse::Data {
                data: preview.values,
            },
            Err(error) if error.is_field_not_found() => {
                debug!(%error, "preview field missing");
                PreviewResponse::Failed {
                    error: messages::field_not_found(&request.field_name),
                }
            }
            Err(error) => {
                warn!(path = %request.file_path.display(), %error, "preview failed");
                PreviewResponse::Failed {
                    error: messages::PREVIEW_FAILED.to_string(),
                }
            }
        }
    }

    /// Build the transfer table, ask where to save it, then write it.
    ///
    /// The table is built before the save dialog opens, so a bad mapping is
    /// reported without prompting.
    pub fn run_transfer(
        &self,
        mappings: &[FieldMapping],
        dialog: &mut dyn FileDialog,
    ) -> TransferResponse {
        if mappings.is_empty() {
            return TransferResponse::failed(messages::NO_MAPPINGS);
        }
        let span = info_span!("transfer", mappings = mappings.len());
        let _guard = span.enter();

        let table = match transfer_table(mappings) {
            Ok(table) => table,
            Err(error) => {
                warn!(%error, "transfer failed");
                return TransferResponse::failed(messages::TRANSFER_FAILED);
            }
        };

        let DialogOutcome::Selected(path) = dialog.pick_save_path(&self.options.default_output_name)
        else {
            info!("save cancelled");
            return TransferResponse::cancelled();
        };

        match self.save(&path, &table) {
            Ok(()) => TransferResponse::saved(&path),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to save transfer");
                TransferResponse::failed(messages::TRANSFER_FAILED)
            }
        }
    }

    fn save(&self, path: &Path, table: &OutputTable) -> fieldmap_output::Result<()> {
        match self.options.format {
            Some(format) => write_table_as(path, table, format),
            None => write_table(path, table).map(|_| ()),
        }
    }
}
