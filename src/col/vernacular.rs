use crate::col::taxa::TaxonIndex;
use crate::col::{header_index, tsv_reader};
use crate::error::Result;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

/// Maps a scientific name to its preferred (first English) common name.
pub type SpeciesMapping = HashMap<String, String>;

const ENGLISH_TAGS: [&str; 3] = ["en", "eng", "english"];

/// Outcome of joining a single VernacularName row against the taxon index.
#[derive(Debug, PartialEq, Eq)]
pub enum VernacularRow {
    Mapped {
        scientific_name: String,
        common_name: String,
    },
    Skipped(VernacularSkip),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VernacularSkip {
    /// Taxon identifier not present in the taxon index.
    UnknownTaxon,
    /// Language tag is not an English variant.
    NonEnglish,
    /// Vernacular name field is empty after trimming.
    EmptyName,
    /// An English name was already recorded for this scientific name.
    AlreadyMapped,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct VernacularSkipTally {
    pub unknown_taxon: usize,
    pub non_english: usize,
    pub empty_name: usize,
    pub already_mapped: usize,
}

impl VernacularSkipTally {
    fn record(&mut self, skip: VernacularSkip) {
        match skip {
            VernacularSkip::UnknownTaxon => self.unknown_taxon += 1,
            VernacularSkip::NonEnglish => self.non_english += 1,
            VernacularSkip::EmptyName => self.empty_name += 1,
            VernacularSkip::AlreadyMapped => self.already_mapped += 1,
        }
    }
}

#[derive(Debug)]
pub struct VernacularScan {
    pub mapping: SpeciesMapping,
    pub skipped: VernacularSkipTally,
}

/// Joins one row against the index and the mapping built so far. First match
/// wins: a row whose scientific name already has an entry is skipped.
pub fn classify_vernacular_row(
    taxon_id: &str,
    name: &str,
    language: &str,
    index: &TaxonIndex,
    mapping: &SpeciesMapping,
) -> VernacularRow {
    let Some(scientific_name) = index.get(taxon_id) else {
        return VernacularRow::Skipped(VernacularSkip::UnknownTaxon);
    };
    let language = language.trim().to_lowercase();
    if !ENGLISH_TAGS.contains(&language.as_str()) {
        return VernacularRow::Skipped(VernacularSkip::NonEnglish);
    }
    let name = name.trim();
    if name.is_empty() {
        return VernacularRow::Skipped(VernacularSkip::EmptyName);
    }
    if mapping.contains_key(scientific_name) {
        return VernacularRow::Skipped(VernacularSkip::AlreadyMapped);
    }
    VernacularRow::Mapped {
        scientific_name: scientific_name.clone(),
        common_name: name.to_string(),
    }
}

/// Scans VernacularName.tsv in file order and builds the common-name mapping.
pub fn build_common_name_map(vernacular_file: &Path, index: &TaxonIndex) -> Result<VernacularScan> {
    let mut reader = tsv_reader(vernacular_file)?;
    let headers = reader.headers()?.clone();
    let taxon_idx = header_index(&headers, "col:taxonID", vernacular_file)?;
    let name_idx = header_index(&headers, "col:name", vernacular_file)?;
    let language_idx = header_index(&headers, "col:language", vernacular_file)?;

    let mut mapping = SpeciesMapping::new();
    let mut skipped = VernacularSkipTally::default();
    for record in reader.records() {
        let record = record?;
        let outcome = classify_vernacular_row(
            record.get(taxon_idx).unwrap_or(""),
            record.get(name_idx).unwrap_or(""),
            record.get(language_idx).unwrap_or(""),
            index,
            &mapping,
        );
        match outcome {
            VernacularRow::Mapped {
                scientific_name,
                common_name,
            } => {
                debug!("Mapped: {} -> {}", scientific_name, common_name);
                mapping.insert(scientific_name, common_name);
            }
            VernacularRow::Skipped(skip) => skipped.record(skip),
        }
    }

    info!("Loaded {} common name mappings", mapping.len());
    debug!(
        "Skipped vernacular rows: {} unknown taxon, {} non-English, {} empty name, {} already mapped",
        skipped.unknown_taxon, skipped.non_english, skipped.empty_name, skipped.already_mapped
    );
    Ok(VernacularScan { mapping, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn raven_index() -> TaxonIndex {
        TaxonIndex::from([("T1".to_string(), "Corvus corax".to_string())])
    }

    fn create_test_tsv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_first_english_match_wins() {
        let content = "col:taxonID\tcol:name\tcol:language\n\
                       T1\tCommon Raven\ten\n\
                       T1\tGrand Corbeau\tfr\n\
                       T1\tNorthern Raven\ten\n";
        let file = create_test_tsv(content);
        let scan = build_common_name_map(file.path(), &raven_index()).unwrap();
        assert_eq!(scan.mapping.len(), 1);
        assert_eq!(scan.mapping["Corvus corax"], "Common Raven");
        assert_eq!(scan.skipped.non_english, 1);
        assert_eq!(scan.skipped.already_mapped, 1);
    }

    #[test]
    fn test_language_tag_variants() {
        for tag in ["en", "EN", "Eng", "English", " english "] {
            let row = classify_vernacular_row("T1", "Common Raven", tag, &raven_index(), &SpeciesMapping::new());
            assert_eq!(
                row,
                VernacularRow::Mapped {
                    scientific_name: "Corvus corax".to_string(),
                    common_name: "Common Raven".to_string(),
                },
                "tag {:?} should be treated as English",
                tag
            );
        }
        let row = classify_vernacular_row("T1", "Korp", "sv", &raven_index(), &SpeciesMapping::new());
        assert_eq!(row, VernacularRow::Skipped(VernacularSkip::NonEnglish));
    }

    #[test]
    fn test_skip_reasons() {
        let index = raven_index();
        let empty = SpeciesMapping::new();
        assert_eq!(
            classify_vernacular_row("T9", "Common Raven", "en", &index, &empty),
            VernacularRow::Skipped(VernacularSkip::UnknownTaxon)
        );
        assert_eq!(
            classify_vernacular_row("T1", "   ", "en", &index, &empty),
            VernacularRow::Skipped(VernacularSkip::EmptyName)
        );
        let taken =
            SpeciesMapping::from([("Corvus corax".to_string(), "Common Raven".to_string())]);
        assert_eq!(
            classify_vernacular_row("T1", "Northern Raven", "en", &index, &taken),
            VernacularRow::Skipped(VernacularSkip::AlreadyMapped)
        );
    }

    #[test]
    fn test_short_row_is_skipped_not_fatal() {
        let content = "col:taxonID\tcol:name\tcol:language\n\
                       T1\tCommon Raven\n\
                       T1\tNorthern Raven\ten\n";
        let file = create_test_tsv(content);
        let scan = build_common_name_map(file.path(), &raven_index()).unwrap();
        // The short row has an empty language field and is skipped.
        assert_eq!(scan.mapping["Corvus corax"], "Northern Raven");
        assert_eq!(scan.skipped.non_english, 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = build_common_name_map(Path::new("/nonexistent/VernacularName.tsv"), &raven_index());
        assert!(matches!(
            result,
            Err(crate::error::CrateError::MissingInputFile(_))
        ));
    }
}
