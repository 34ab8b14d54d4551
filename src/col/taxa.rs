use crate::col::{header_index, tsv_reader};
use crate::error::Result;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

pub const TARGET_CLASS: &str = "Aves";
pub const TARGET_RANK: &str = "species";

/// Maps a COL taxon identifier to its binomial scientific name.
pub type TaxonIndex = HashMap<String, String>;

/// Outcome of classifying a single NameUsage row.
#[derive(Debug, PartialEq, Eq)]
pub enum TaxaRow {
    Species { id: String, scientific_name: String },
    Skipped(TaxaSkip),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxaSkip {
    /// Taxonomic class field is not the target class.
    NotTargetClass,
    /// Rank field is not "species".
    NotSpecies,
    /// Scientific name is empty or not a binomial (no interior space).
    NotBinomial,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct TaxaSkipTally {
    pub not_target_class: usize,
    pub not_species: usize,
    pub not_binomial: usize,
}

impl TaxaSkipTally {
    fn record(&mut self, skip: TaxaSkip) {
        match skip {
            TaxaSkip::NotTargetClass => self.not_target_class += 1,
            TaxaSkip::NotSpecies => self.not_species += 1,
            TaxaSkip::NotBinomial => self.not_binomial += 1,
        }
    }
}

#[derive(Debug)]
pub struct TaxaScan {
    pub index: TaxonIndex,
    pub skipped: TaxaSkipTally,
}

/// Applies the inclusion rule to one row's fields: class must match the
/// target, rank must be "species", and the trimmed name must be binomial.
pub fn classify_taxa_row(class: &str, rank: &str, scientific_name: &str, id: &str) -> TaxaRow {
    if class != TARGET_CLASS {
        return TaxaRow::Skipped(TaxaSkip::NotTargetClass);
    }
    if rank != TARGET_RANK {
        return TaxaRow::Skipped(TaxaSkip::NotSpecies);
    }
    let name = scientific_name.trim();
    if name.is_empty() || !name.contains(' ') {
        return TaxaRow::Skipped(TaxaSkip::NotBinomial);
    }
    TaxaRow::Species {
        id: id.to_string(),
        scientific_name: name.to_string(),
    }
}

/// Scans NameUsage.tsv and builds the taxon index for the target class.
/// Duplicate identifiers overwrite (last write wins).
pub fn build_taxon_index(taxa_file: &Path) -> Result<TaxaScan> {
    let mut reader = tsv_reader(taxa_file)?;
    let headers = reader.headers()?.clone();
    let class_idx = header_index(&headers, "col:class", taxa_file)?;
    let rank_idx = header_index(&headers, "col:rank", taxa_file)?;
    let name_idx = header_index(&headers, "col:scientificName", taxa_file)?;
    let id_idx = header_index(&headers, "col:ID", taxa_file)?;

    let mut index = TaxonIndex::new();
    let mut skipped = TaxaSkipTally::default();
    for record in reader.records() {
        let record = record?;
        let outcome = classify_taxa_row(
            record.get(class_idx).unwrap_or(""),
            record.get(rank_idx).unwrap_or(""),
            record.get(name_idx).unwrap_or(""),
            record.get(id_idx).unwrap_or(""),
        );
        match outcome {
            TaxaRow::Species {
                id,
                scientific_name,
            } => {
                index.insert(id, scientific_name);
            }
            TaxaRow::Skipped(skip) => skipped.record(skip),
        }
    }

    info!(
        "Found {} {} species in COL data",
        index.len(),
        TARGET_CLASS
    );
    debug!(
        "Skipped taxa rows: {} wrong class, {} wrong rank, {} not binomial",
        skipped.not_target_class, skipped.not_species, skipped.not_binomial
    );
    Ok(TaxaScan { index, skipped })
}
