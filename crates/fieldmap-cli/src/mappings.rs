//! Mapping lists from command-line input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use fieldmap_model::FieldMapping;

/// Split a `SOURCE=DEST` argument into its two field names.
///
/// Only the first `=` separates, so destination names may contain `=`.
pub fn parse_map_arg(value: &str) -> Result<(String, String)> {
    let Some((source, dest)) = value.split_once('=') else {
        bail!("invalid mapping '{value}': expected SOURCE=DEST");
    };
    let (source, dest) = (source.trim(), dest.trim());
    if source.is_empty() || dest.is_empty() {
        bail!("invalid mapping '{value}': both field names are required");
    }
    Ok((source.to_string(), dest.to_string()))
}

/// Build mappings from `SOURCE=DEST` pairs, all reading from `source`.
pub fn mappings_from_pairs(source: &Path, pairs: &[String]) -> Result<Vec<FieldMapping>> {
    pairs
        .iter()
        .map(|pair| {
            let (source_field, dest_field) = parse_map_arg(pair)?;
            Ok(FieldMapping::new(source, source_field, dest_field))
        })
        .collect()
}

/// Read a JSON mapping list in the boundary wire shape.
pub fn load_mappings(path: &Path) -> Result<Vec<FieldMapping>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read mappings {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse mappings {}", path.display()))
}
