//! Overlap report
//!
//! One full recomputation: resolve the selection, classify every touched
//! country, pick the headline and collect the per-category associations.

use super::classifier::{ClassificationResult, StatusRecord, classify};
use super::country_sets::CategoryCountrySets;
use super::headline::{HeadlineOverlap, select_headline};
use crate::filter::{Association, Category, Dataset, Selection};
use serde::{Deserialize, Serialize};

/// Selected labels of one category and the countries they cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAssociations {
    pub category: Category,
    pub associations: Vec<Association>,
}

/// Everything derived from a single selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapReport {
    pub selection: Selection,
    pub records: Vec<StatusRecord>,
    pub headline: Option<HeadlineOverlap>,
    pub associations: Vec<CategoryAssociations>,
    #[serde(skip)]
    classification: ClassificationResult,
}

impl OverlapReport {
    pub fn build(dataset: &Dataset, selection: &Selection) -> Self {
        let sets = CategoryCountrySets::resolve(dataset, selection);
        let classification = classify(&sets);
        let headline = select_headline(&sets);
        let associations = selection
            .active_categories()
            .iter()
            .map(|category| CategoryAssociations {
                category,
                associations: dataset.associations(category, selection.labels(category)),
            })
            .collect();

        Self {
            selection: selection.clone(),
            records: classification.records(),
            headline,
            associations,
            classification,
        }
    }

    pub fn classification(&self) -> &ClassificationResult {
        &self.classification
    }

    pub fn associations_for(&self, category: Category) -> Option<&[Association]> {
        self.associations
            .iter()
            .find(|a| a.category == category)
            .map(|a| a.associations.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
