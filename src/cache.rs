//! Local cache for the Catalogue of Life ColDP export.
//!
//! The archive is fetched once and extracted once; repeated runs reuse the
//! cached files and perform no network or extraction work.

use crate::error::{CrateError, Result};
use log::info;
use std::fs::{self, File};
use std::path::PathBuf;
use zip::ZipArchive;

pub const ARCHIVE_FILE_NAME: &str = "col_data.zip";
pub const EXTRACTED_DIR_NAME: &str = "col_data";
pub const TAXA_FILE_NAME: &str = "NameUsage.tsv";
pub const VERNACULAR_FILE_NAME: &str = "VernacularName.tsv";

pub const USER_AGENT: &str = "avilabels/0.1 (species label enhancer)";

/// Explicit cache locations, passed in rather than read from globals so tests
/// can point the pipeline at temporary directories.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub cache_dir: PathBuf,
    pub archive_url: String,
}

/// The two extracted TSV files the rest of the pipeline reads.
#[derive(Debug, Clone)]
pub struct ColPaths {
    pub taxa_file: PathBuf,
    pub vernacular_file: PathBuf,
}

impl CacheConfig {
    pub fn new(cache_dir: PathBuf, archive_url: String) -> Self {
        Self {
            cache_dir,
            archive_url,
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.cache_dir.join(ARCHIVE_FILE_NAME)
    }

    pub fn extracted_dir(&self) -> PathBuf {
        self.cache_dir.join(EXTRACTED_DIR_NAME)
    }

    pub fn col_paths(&self) -> ColPaths {
        let extracted = self.extracted_dir();
        ColPaths {
            taxa_file: extracted.join(TAXA_FILE_NAME),
            vernacular_file: extracted.join(VERNACULAR_FILE_NAME),
        }
    }

    /// Makes sure the extracted COL data is on disk, downloading and
    /// extracting only what is missing. Idempotent.
    pub async fn ensure_available(&self, client: &reqwest::Client) -> Result<ColPaths> {
        fs::create_dir_all(self.extracted_dir())?;
        self.download_archive(client).await?;
        self.extract_archive()?;
        Ok(self.col_paths())
    }

    async fn download_archive(&self, client: &reqwest::Client) -> Result<()> {
        let archive_path = self.archive_path();
        if archive_path.exists() {
            info!("Using cached COL archive: {}", archive_path.display());
            return Ok(());
        }

        info!(
            "Downloading Catalogue of Life data from {} (this may take several minutes)",
            self.archive_url
        );
        let response = client
            .get(&self.archive_url)
            .send()
            .await
            .map_err(CrateError::DownloadError)?;
        if !response.status().is_success() {
            return Err(CrateError::DownloadStatusError {
                status: response.status(),
                url: self.archive_url.clone(),
            });
        }
        let body = response.bytes().await.map_err(CrateError::DownloadError)?;
        fs::write(&archive_path, &body)?;
        info!("Downloaded COL archive to {}", archive_path.display());
        Ok(())
    }

    fn extract_archive(&self) -> Result<()> {
        let paths = self.col_paths();
        if paths.taxa_file.exists() && paths.vernacular_file.exists() {
            info!(
                "Using cached extracted COL data: {}",
                self.extracted_dir().display()
            );
            return Ok(());
        }

        let extracted_dir = self.extracted_dir();
        info!("Extracting COL data to {}", extracted_dir.display());
        let archive_file = File::open(self.archive_path())?;
        let mut archive = ZipArchive::new(archive_file)?;
        archive.extract(&extracted_dir)?;
        info!("COL data extracted successfully");
        Ok(())
    }
}
