//! Options for the transfer boundary.

use fieldmap_output::{DEFAULT_OUTPUT_NAME, OutputFormat};

/// Options controlling how transfers are saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    /// File name suggested by the save dialog.
    pub default_output_name: String,

    /// Force an output format instead of following the chosen extension.
    pub format: Option<OutputFormat>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            default_output_name: DEFAULT_OUTPUT_NAME.to_string(),
            format: None,
        }
    }
}

impl TransferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_output_name(mut self, name: impl Into<String>) -> Self {
        self.default_output_name = name.into();
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}
