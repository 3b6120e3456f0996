//! Transfer engine.
//!
//! Turns an ordered list of field mappings into an output table whose header
//! is the destination names and whose rows are the matching source values.
//! Persisting the table is the output crate's job.

pub mod engine;
pub mod error;
pub mod plan;

pub use engine::{apply_plan, build_output_table, transfer_table};
pub use error::{Result, TransferError};
pub use plan::{TransferPlan, header_lookup};
