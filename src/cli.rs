use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_COL_URL: &str =
    "https://api.checklistbank.org/dataset/311872/export.zip?extended=true&format=ColDP";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the input label list (one label per line).
    #[arg(short, long, value_name = "FILE", default_value = "labels.csv")]
    pub input_file: PathBuf,

    /// Path to the enhanced output CSV.
    #[arg(short, long, value_name = "FILE", default_value = "enhanced_labels.csv")]
    pub output_file: PathBuf,

    /// Directory used to cache the downloaded COL archive and its extraction.
    #[arg(short, long, value_name = "DIR", default_value = "cache")]
    pub cache_dir: PathBuf,

    /// URL of the Catalogue of Life ColDP export archive.
    #[arg(long, value_name = "URL", default_value = DEFAULT_COL_URL)]
    pub col_url: String,
}
