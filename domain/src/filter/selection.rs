//! User selections per category

use super::category::Category;
use super::category_set::CategorySet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The labels chosen for each category.
///
/// A category is *active* when at least one label is selected for it.
/// Labels keep the order in which they were chosen and never repeat.
/// Serialized as a map from category name to its labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<Category, Vec<String>>",
    from = "BTreeMap<Category, Vec<String>>"
)]
pub struct Selection {
    labels: [Vec<String>; 4],
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add several labels to a category
    pub fn with<I, S>(mut self, category: Category, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.select(category, label);
        }
        self
    }

    /// Add a label. Returns false if it was already selected.
    pub fn select(&mut self, category: Category, label: impl Into<String>) -> bool {
        let label = label.into();
        let labels = &mut self.labels[category.index()];
        if labels.contains(&label) {
            return false;
        }
        labels.push(label);
        true
    }

    /// Remove a label. Returns false if it was not selected.
    pub fn deselect(&mut self, category: Category, label: &str) -> bool {
        let labels = &mut self.labels[category.index()];
        let before = labels.len();
        labels.retain(|l| l != label);
        labels.len() != before
    }

    pub fn clear(&mut self, category: Category) {
        self.labels[category.index()].clear();
    }

    pub fn clear_all(&mut self) {
        for labels in &mut self.labels {
            labels.clear();
        }
    }

    pub fn labels(&self, category: Category) -> &[String] {
        &self.labels[category.index()]
    }

    pub fn is_active(&self, category: Category) -> bool {
        !self.labels[category.index()].is_empty()
    }

    pub fn active_categories(&self) -> CategorySet {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_active(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active_categories().is_empty()
    }
}

impl From<Selection> for BTreeMap<Category, Vec<String>> {
    fn from(selection: Selection) -> Self {
        Category::ALL.into_iter().zip(selection.labels).collect()
    }
}

impl From<BTreeMap<Category, Vec<String>>> for Selection {
    fn from(map: BTreeMap<Category, Vec<String>>) -> Self {
        map.into_iter()
            .fold(Selection::new(), |selection, (category, labels)| {
                selection.with(category, labels)
            })
    }
}
