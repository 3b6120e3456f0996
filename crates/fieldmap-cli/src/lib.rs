//! CLI library components for fieldmap.

pub mod dialog;
pub mod logging;
pub mod mappings;

pub use dialog::TerminalDialog;
pub use mappings::{load_mappings, mappings_from_pairs, parse_map_arg};
