use crate::error::{CrateError, Result};
use std::path::Path;

// Loads the raw label list: one label per line, no header, first column only.
pub fn load_labels(file_path: &Path) -> Result<Vec<String>> {
    if !file_path.exists() {
        return Err(CrateError::MissingInputFile(file_path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(file_path)?;

    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Blank lines are dropped by the reader; anything else keeps its
        // first field, trimmed.
        let label = record.get(0).unwrap_or("").trim().to_string();
        labels.push(label);
    }
    Ok(labels)
}
