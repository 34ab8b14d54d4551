pub mod cache;
pub mod cli;
pub mod col;
pub mod csv_handler;
pub mod error;
pub mod labels;
pub mod report;

use cache::CacheConfig;
use clap::Parser;
use cli::Cli;
use col::taxa::build_taxon_index;
use col::vernacular::build_common_name_map;
use error::{CrateError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use labels::classify_and_format;
use log::{error, info};
use reqwest::Client;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .expect("Failed to initialize logger");

    let cli = Cli::parse();
    info!("Starting label enhancement...");
    info!("Input file: {:?}", cli.input_file);
    info!("Output file: {:?}", cli.output_file);
    info!("Cache directory: {:?}", cli.cache_dir);

    let start_time = Instant::now();

    // 1. Ensure the COL data is cached locally
    let cache_config = CacheConfig::new(cli.cache_dir, cli.col_url);
    let client = Client::builder()
        .user_agent(cache::USER_AGENT)
        .build()
        .map_err(CrateError::DownloadError)?;
    let col_paths = match cache_config.ensure_available(&client).await {
        Ok(paths) => paths,
        Err(e) => {
            error!("Failed to obtain COL data: {}", e);
            return Err(e);
        }
    };

    // 2. Build the species mapping from the COL tables
    info!("Loading species from COL data...");
    let taxa_scan = build_taxon_index(&col_paths.taxa_file)?;
    let vernacular_scan = build_common_name_map(&col_paths.vernacular_file, &taxa_scan.index)?;
    let mapping = vernacular_scan.mapping;

    // 3. Classify and format every label
    info!("Reading labels from {:?}", cli.input_file);
    let raw_labels = match csv_handler::load_labels(&cli.input_file) {
        Ok(labels) => {
            info!("Loaded {} labels.", labels.len());
            labels
        }
        Err(e) => {
            error!("Failed to load labels: {}", e);
            return Err(e);
        }
    };

    let pb = ProgressBar::new(raw_labels.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("Failed to set progress bar style")
            .progress_chars("##-"),
    );
    let mut records = Vec::with_capacity(raw_labels.len());
    for label in &raw_labels {
        records.push(classify_and_format(label, &mapping));
        pb.inc(1);
    }
    pb.finish_with_message("Label processing complete.");

    // 4. Write the enhanced CSV and print the summary
    info!("Writing enhanced labels to {:?}", cli.output_file);
    report::write_report(&records, &cli.output_file)?;
    info!("Enhanced labels saved to {:?}", cli.output_file);

    let stats = report::compute_stats(&records);
    report::print_summary(&records, &stats);

    let duration = start_time.elapsed();
    println!("Execution time: {:.2?}", duration);

    Ok(())
}
