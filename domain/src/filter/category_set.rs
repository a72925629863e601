//! Compact set of categories

use super::category::Category;
use serde::{Deserialize, Serialize};

/// A set of [`Category`] values, iterated in canonical order.
///
/// Used both for the categories a country belongs to and for the
/// categories that are active in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b1111)
    }

    pub fn of(categories: &[Category]) -> Self {
        categories.iter().copied().collect()
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= 1 << category.index();
    }

    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    pub fn contains(self, category: Category) -> bool {
        self.0 & (1 << category.index()) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every category of `self` is also in `other`
    pub fn is_subset(self, other: CategorySet) -> bool {
        self.0 & other.0 == self.0
    }

    /// Categories in canonical order
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Every non-empty subset of the four categories
    pub fn non_empty_subsets() -> impl Iterator<Item = CategorySet> {
        (1u8..=0b1111).map(CategorySet)
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_canonical_regardless_of_insertion() {
        let set = CategorySet::of(&[Category::Project, Category::Program, Category::Funder]);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![Category::Program, Category::Funder, Category::Project]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_subset() {
        let pair = CategorySet::of(&[Category::Program, Category::Center]);
        let triple = pair.with(Category::Funder);
        assert!(pair.is_subset(triple));
        assert!(!triple.is_subset(pair));
        assert!(CategorySet::empty().is_subset(pair));
    }

    #[test]
    fn test_non_empty_subsets_count() {
        assert_eq!(CategorySet::non_empty_subsets().count(), 15);
        assert!(CategorySet::non_empty_subsets().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_serde_as_list() {
        let set = CategorySet::of(&[Category::Funder, Category::Program]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"program\",\"funder\"]");
        let back: CategorySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
