//! Label classification and display-name formatting.
//!
//! Pure functions: no file or network access, so the classification rules are
//! testable in isolation from the COL data.

use crate::col::vernacular::SpeciesMapping;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Matches a parenthesized substring plus the whitespace run before it, e.g.
// the " (song)" in "Human vocal (song)".
static PARENTHETICAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)").expect("Invalid parenthetical regex"));

/// One enhanced output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub original_label: String,
    pub common_name: String,
    pub display_name: String,
}

/// Whether a label looks like a binomial scientific name.
pub fn is_scientific_name(label: &str) -> bool {
    // Underscores and parentheses mark free-form tags, not species.
    if label.contains('_') || label.contains('(') {
        return false;
    }

    let parts: Vec<&str> = label.trim().split_whitespace().collect();
    if parts.len() != 2 {
        return false;
    }

    let (genus, species) = (parts[0], parts[1]);
    let genus_capitalized = genus.chars().next().is_some_and(char::is_uppercase);
    let species_lowercase = species.chars().next().is_some_and(char::is_lowercase);
    if !genus_capitalized || !species_lowercase {
        return false;
    }

    genus.chars().all(char::is_alphabetic) && species.chars().all(char::is_alphabetic)
}

/// Cleans a non-species label for display: underscores become spaces and
/// parenthesized qualifiers are dropped.
pub fn format_non_species_label(label: &str) -> String {
    let spaced = label.replace('_', " ");
    PARENTHETICAL_REGEX.replace_all(&spaced, "").trim().to_string()
}

/// Classifies one label and resolves its display name against the mapping.
pub fn classify_and_format(label: &str, mapping: &SpeciesMapping) -> LabelRecord {
    if is_scientific_name(label) {
        let common_name = mapping.get(label).cloned();
        LabelRecord {
            original_label: label.to_string(),
            display_name: common_name.clone().unwrap_or_else(|| label.to_string()),
            common_name: common_name.unwrap_or_default(),
        }
    } else {
        LabelRecord {
            original_label: label.to_string(),
            common_name: String::new(),
            display_name: format_non_species_label(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scientific_name() {
        assert!(is_scientific_name("Corvus corax"));
        assert!(is_scientific_name("Passer domesticus"));

        assert!(!is_scientific_name("Corvus_corax")); // underscore
        assert!(!is_scientific_name("Corvus corax linnaeus")); // three tokens
        assert!(!is_scientific_name("corvus corax")); // lowercase genus
        assert!(!is_scientific_name("Corvus Corax")); // capitalized epithet
        assert!(!is_scientific_name("Corvus")); // single token
        assert!(!is_scientific_name("Corvus corax2")); // digit
        assert!(!is_scientific_name("Human vocal (song)")); // parenthesis
        assert!(!is_scientific_name(""));
    }

    #[test]
    fn test_format_non_species_label() {
        assert_eq!(format_non_species_label("Human_vocal_(song)"), "Human vocal");
        assert_eq!(format_non_species_label("Engine_noise"), "Engine noise");
        assert_eq!(format_non_species_label("Silence"), "Silence");
        assert_eq!(
            format_non_species_label("Dog_(barking)_(distant)"),
            "Dog"
        );
    }

    #[test]
    fn test_classify_with_empty_mapping() {
        let empty = SpeciesMapping::new();

        let record = classify_and_format("Corvus corax", &empty);
        assert_eq!(record.common_name, "");
        assert_eq!(record.display_name, "Corvus corax");

        let record = classify_and_format("Human_vocal_(song)", &empty);
        assert_eq!(record.common_name, "");
        assert_eq!(record.display_name, "Human vocal");
    }

    #[test]
    fn test_classify_with_mapping() {
        let mapping =
            SpeciesMapping::from([("Corvus corax".to_string(), "Common Raven".to_string())]);

        assert_eq!(
            classify_and_format("Corvus corax", &mapping),
            LabelRecord {
                original_label: "Corvus corax".to_string(),
                common_name: "Common Raven".to_string(),
                display_name: "Common Raven".to_string(),
            }
        );
        assert_eq!(
            classify_and_format("Human_vocal_(song)", &mapping),
            LabelRecord {
                original_label: "Human_vocal_(song)".to_string(),
                common_name: String::new(),
                display_name: "Human vocal".to_string(),
            }
        );
        assert_eq!(
            classify_and_format("Silence", &mapping),
            LabelRecord {
                original_label: "Silence".to_string(),
                common_name: String::new(),
                display_name: "Silence".to_string(),
            }
        );
    }

    #[test]
    fn test_unmapped_species_falls_back_to_original() {
        let mapping =
            SpeciesMapping::from([("Corvus corax".to_string(), "Common Raven".to_string())]);
        let record = classify_and_format("Passer domesticus", &mapping);
        assert_eq!(record.common_name, "");
        assert_eq!(record.display_name, "Passer domesticus");
    }
}
