//! Per-country classification

use super::country_sets::CategoryCountrySets;
use super::label::OverlapLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One exported row: a country and its status label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// The label of every country touched by at least one active category.
///
/// Countries are kept in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    entries: BTreeMap<String, OverlapLabel>,
}

impl ClassificationResult {
    pub fn get(&self, country: &str) -> Option<OverlapLabel> {
        self.entries.get(country).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, OverlapLabel)> {
        self.entries.iter().map(|(c, l)| (c.as_str(), *l))
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat `(Country, Status)` rows for tables and export
    pub fn records(&self) -> Vec<StatusRecord> {
        self.iter()
            .map(|(country, label)| StatusRecord {
                country: country.to_string(),
                status: label.to_string(),
            })
            .collect()
    }
}

/// Label every country in the union of the active sets.
pub fn classify(sets: &CategoryCountrySets) -> ClassificationResult {
    let entries = sets
        .union_all()
        .into_iter()
        .filter_map(|country| {
            OverlapLabel::from_memberships(sets.memberships(country))
                .map(|label| (country.to_string(), label))
        })
        .collect();
    ClassificationResult { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Category;
    use std::collections::BTreeSet;

    fn sets() -> CategoryCountrySets {
        CategoryCountrySets::new()
            .with(Category::Program, ["Kenya", "Peru", "Chad"])
            .with(Category::Center, ["Kenya", "Chad"])
            .with(Category::Funder, ["Kenya", "Mali"])
            .with(Category::Project, ["Kenya", "Chad", "Nepal"])
    }

    #[test]
    fn test_keys_equal_union_of_active_sets() {
        let sets = sets();
        let result = classify(&sets);
        let keys: BTreeSet<&str> = result.countries().collect();
        assert_eq!(keys, sets.union_all());
    }

    #[test]
    fn test_labels_per_country() {
        let result = classify(&sets());
        let status = |c: &str| result.get(c).unwrap().to_string();
        assert_eq!(status("Kenya"), "In All Four");
        assert_eq!(status("Chad"), "In Programs and Centers and Projects");
        assert_eq!(status("Peru"), "Only in Programs");
        assert_eq!(status("Mali"), "Only in Funders");
        assert_eq!(status("Nepal"), "Only in Projects");
    }

    #[test]
    fn test_label_arity_matches_membership_count() {
        let sets = sets();
        let result = classify(&sets);
        for (country, label) in result.iter() {
            let count = Category::ALL
                .iter()
                .filter(|c| sets.get(**c).is_some_and(|s| s.contains(country)))
                .count();
            assert_eq!(label.arity(), count, "country {country}");
        }
    }

    #[test]
    fn test_funder_and_program_is_canonical() {
        let sets = CategoryCountrySets::new()
            .with(Category::Funder, ["X"])
            .with(Category::Program, ["X"]);
        let result = classify(&sets);
        assert_eq!(result.get("X").unwrap().to_string(), "In Programs and Funders");
    }

    #[test]
    fn test_no_active_categories() {
        let result = classify(&CategoryCountrySets::new());
        assert!(result.is_empty());
        assert!(result.records().is_empty());
    }

    #[test]
    fn test_records() {
        let sets = CategoryCountrySets::new().with(Category::Center, ["Chad"]);
        assert_eq!(
            classify(&sets).records(),
            vec![StatusRecord {
                country: "Chad".to_string(),
                status: "Only in Centers".to_string(),
            }]
        );
    }
}
