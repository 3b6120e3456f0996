//! File selection collaborator.

use std::path::PathBuf;

/// Result of asking the user for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Cancelled,
    Selected(PathBuf),
}

/// Asks the user for files. Implemented by whatever front end is attached.
pub trait FileDialog {
    /// Pick an existing spreadsheet. `extensions` lists the accepted types.
    fn pick_source(&mut self, extensions: &[&str]) -> DialogOutcome;

    /// Pick where to save a transfer, suggesting `default_name`.
    fn pick_save_path(&mut self, default_name: &str) -> DialogOutcome;
}
