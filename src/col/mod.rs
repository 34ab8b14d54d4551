//! Parsers for the extracted Catalogue of Life ColDP tables.

pub mod taxa;
pub mod vernacular;

use crate::error::{CrateError, Result};
use std::fs::File;
use std::path::Path;

/// Opens a ColDP TSV. Rows may be short (trailing fields missing); readers
/// treat absent fields as empty strings rather than erroring.
pub(crate) fn tsv_reader(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(CrateError::MissingInputFile(path.to_path_buf()));
    }
    let reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;
    Ok(reader)
}

pub(crate) fn header_index(
    headers: &csv::StringRecord,
    name: &str,
    file: &Path,
) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CrateError::MissingHeader {
            header: name.to_string(),
            file: file.display().to_string(),
        })
}
