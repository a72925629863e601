//! Overlap labels
//!
//! A label names the combination of active categories a country belongs
//! to. Category names always appear in canonical order, whatever order
//! the selections were made in.

use crate::core::error::DomainError;
use crate::filter::{Category, CategorySet};
use serde::{Deserialize, Serialize};

/// The status label of a classified country.
///
/// # Example
///
/// ```
/// use overlap_domain::{Category, CategorySet, OverlapLabel};
///
/// let label = OverlapLabel::from_memberships(
///     CategorySet::of(&[Category::Funder, Category::Program]),
/// ).unwrap();
/// assert_eq!(label.to_string(), "In Programs and Funders");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OverlapLabel(CategorySet);

impl OverlapLabel {
    /// Label for a membership set; `None` when the set is empty
    pub fn from_memberships(memberships: CategorySet) -> Option<Self> {
        (!memberships.is_empty()).then_some(Self(memberships))
    }

    pub fn categories(self) -> CategorySet {
        self.0
    }

    /// Number of categories named by the label
    pub fn arity(self) -> usize {
        self.0.len()
    }

    /// Every label the classifier can produce for four categories
    pub fn all() -> impl Iterator<Item = OverlapLabel> {
        CategorySet::non_empty_subsets().map(OverlapLabel)
    }

    fn render(self) -> String {
        let names: Vec<&str> = self.0.iter().map(Category::plural).collect();
        match names.len() {
            4 => "In All Four".to_string(),
            1 => format!("Only in {}", names[0]),
            _ => format!("In {}", names.join(" and ")),
        }
    }
}

impl std::fmt::Display for OverlapLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::str::FromStr for OverlapLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OverlapLabel::all()
            .find(|label| label.render() == s)
            .ok_or_else(|| DomainError::UnknownLabel(s.to_string()))
    }
}

impl TryFrom<String> for OverlapLabel {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OverlapLabel> for String {
    fn from(label: OverlapLabel) -> Self {
        label.render()
    }
}
