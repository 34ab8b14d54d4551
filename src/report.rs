use crate::error::Result;
use crate::labels::{LabelRecord, is_scientific_name};
use std::path::Path;

const MAPPED_SAMPLE_CAP: usize = 10;
const TOTAL_SAMPLE_CAP: usize = 15;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub scientific: usize,
    pub mapped: usize,
}

pub fn compute_stats(records: &[LabelRecord]) -> RunStats {
    RunStats {
        total: records.len(),
        scientific: records
            .iter()
            .filter(|r| is_scientific_name(&r.original_label))
            .count(),
        mapped: records.iter().filter(|r| !r.common_name.is_empty()).count(),
    }
}

/// Writes the enhanced label CSV: a header row, then one row per record in
/// input order.
pub fn write_report(records: &[LabelRecord], output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// A bounded, human-oriented sample of the run's results: mapped species
/// first, then formatted free-form tags.
pub fn sample_lines(records: &[LabelRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    for record in records {
        if !record.common_name.is_empty() && lines.len() < MAPPED_SAMPLE_CAP {
            lines.push(format!(
                "{} -> {}",
                record.original_label, record.common_name
            ));
        } else if record.original_label.contains('_') && lines.len() < TOTAL_SAMPLE_CAP {
            lines.push(format!(
                "{} -> {} (formatted)",
                record.original_label, record.display_name
            ));
        }
        if lines.len() >= TOTAL_SAMPLE_CAP {
            break;
        }
    }
    lines
}

pub fn print_summary(records: &[LabelRecord], stats: &RunStats) {
    println!("\n--- Summary Report ---");
    println!("Total labels processed: {}", stats.total);
    println!("Scientific names found: {}", stats.scientific);
    println!("Common names mapped: {}", stats.mapped);

    let samples = sample_lines(records);
    if !samples.is_empty() {
        println!("\nSample mappings:");
        for line in samples {
            println!("  {}", line);
        }
    }
}
