use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// Number of data rows sampled by a preview. Fixed, not configurable.
pub const PREVIEW_ROWS: usize = 5;

/// A read-only sample of one column, in row order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Preview {
    pub field: String,
    pub values: Vec<CellValue>,
}

impl Preview {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
