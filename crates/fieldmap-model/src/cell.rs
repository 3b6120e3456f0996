//! Cell values as read from a spreadsheet.
//!
//! Values are opaque scalars. The reader never coerces between kinds: a text
//! cell stays text, a number stays a number, and anything without content is
//! [`CellValue::Empty`].

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "RawCell")]
pub enum CellValue {
    /// No content (missing cell, blank cell, or an error cell).
    #[default]
    Empty,
    /// String content.
    Text(String),
    /// Numeric content. Integers and floats share this variant.
    Number(f64),
    /// Boolean content.
    Bool(bool),
}

impl CellValue {
    /// Build a text cell, mapping an empty string to [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// True when the cell carries no content.
    ///
    /// An empty string counts as blank; zero and `false` do not.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }

    /// True for blank cells, zero, NaN and `false`.
    ///
    /// Previews show these as empty; transfers copy them unchanged.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Number(value) => *value == 0.0 || value.is_nan(),
            Self::Bool(value) => !value,
            _ => self.is_blank(),
        }
    }

    /// Collapse blank cells into [`CellValue::Empty`].
    #[must_use]
    pub fn or_empty(self) -> Self {
        if self.is_blank() { Self::Empty } else { self }
    }
}

/// Format a number the way a spreadsheet shows it: integral values drop the
/// fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// Empty cells go over the wire as "" rather than null.
impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl From<RawCell> for CellValue {
    fn from(raw: RawCell) -> Self {
        match raw {
            RawCell::Bool(value) => Self::Bool(value),
            RawCell::Number(value) => Self::Number(value),
            RawCell::Text(value) => Self::text(value),
            RawCell::Null => Self::Empty,
        }
    }
}
