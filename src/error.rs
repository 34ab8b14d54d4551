use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required TSV header '{header}' in {file}")]
    MissingHeader { header: String, file: String },

    #[error("Required input file not found: {0}")]
    MissingInputFile(PathBuf),

    #[error("Failed to download COL archive: {0}")]
    DownloadError(reqwest::Error),

    #[error("COL archive download returned status {status} for {url}")]
    DownloadStatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Failed to extract COL archive: {0}")]
    ArchiveError(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, CrateError>;
