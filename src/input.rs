use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

/// Loads a JSON Lines file into memory, one record per line.
///
/// Any line that is not valid JSON aborts the run; there is no
/// skip-and-continue path for malformed input.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut records = Vec::<Value>::new();
    for (index, line) in raw.lines().enumerate() {
        let record = serde_json::from_str::<Value>(line).with_context(|| {
            format!("invalid json on line {} of {}", index + 1, path.display())
        })?;
        records.push(record);
    }

    info!(path = %path.display(), records = records.len(), "loaded records");

    Ok(records)
}
