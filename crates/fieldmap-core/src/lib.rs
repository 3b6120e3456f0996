//! Workbench boundary and session controller.
//!
//! [`Workbench`] answers the three boundary requests (open a source,
//! preview a field, run a transfer) with response values only. [`Session`]
//! layers a mapping graph and a status line on top for interactive front
//! ends.

pub mod dialog;
pub mod options;
pub mod session;
pub mod workbench;

pub use dialog::{DialogOutcome, FileDialog};
pub use options::TransferOptions;
pub use session::{Connection, ConnectionPreview, EMPTY_GRAPH_MESSAGE, Session, Status};
pub use workbench::Workbench;
