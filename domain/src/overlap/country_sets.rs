//! Per-category country sets

use crate::filter::{Category, CategorySet, Dataset, Selection};
use std::collections::BTreeSet;

/// The resolved country set of every category, or `None` when the
/// category had no selected labels.
///
/// An active category may still have an empty set (its labels matched no
/// rows); it keeps taking part in the headline overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCountrySets {
    sets: [Option<BTreeSet<String>>; 4],
}

impl CategoryCountrySets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every active category of `selection` against `dataset`
    pub fn resolve(dataset: &Dataset, selection: &Selection) -> Self {
        let mut sets = Self::new();
        for category in selection.active_categories().iter() {
            sets.sets[category.index()] =
                Some(dataset.resolve(category, selection.labels(category)));
        }
        sets
    }

    /// Builder: mark a category active with the given countries
    pub fn with<I, S>(mut self, category: Category, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sets[category.index()] = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.sets[category.index()].as_ref()
    }

    pub fn active(&self) -> CategorySet {
        Category::ALL
            .into_iter()
            .filter(|c| self.sets[c.index()].is_some())
            .collect()
    }

    /// Categories whose set contains `country`
    pub fn memberships(&self, country: &str) -> CategorySet {
        Category::ALL
            .into_iter()
            .filter(|c| self.get(*c).is_some_and(|s| s.contains(country)))
            .collect()
    }

    /// Union of the sets of `categories` (inactive ones contribute nothing)
    pub fn union_of(&self, categories: CategorySet) -> BTreeSet<&str> {
        categories
            .iter()
            .filter_map(|c| self.get(c))
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Intersection of the sets of `categories`; empty if any is inactive
    pub fn intersection_of(&self, categories: CategorySet) -> BTreeSet<&str> {
        let mut sets = categories.iter().map(|c| self.get(c));
        let Some(Some(first)) = sets.next() else {
            return BTreeSet::new();
        };
        let mut result: BTreeSet<&str> = first.iter().map(String::as_str).collect();
        for set in sets {
            match set {
                Some(set) => result.retain(|country| set.contains(*country)),
                None => return BTreeSet::new(),
            }
        }
        result
    }

    /// Union of every active set
    pub fn union_all(&self) -> BTreeSet<&str> {
        self.union_of(self.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> CategoryCountrySets {
        CategoryCountrySets::new()
            .with(Category::Program, ["A", "B"])
            .with(Category::Funder, ["B", "C"])
            .with(Category::Project, Vec::<String>::new())
    }

    #[test]
    fn test_active_includes_empty_sets() {
        assert_eq!(
            sets().active(),
            CategorySet::of(&[Category::Program, Category::Funder, Category::Project])
        );
    }

    #[test]
    fn test_union_and_intersection() {
        let sets = sets();
        let pf = CategorySet::of(&[Category::Program, Category::Funder]);
        assert_eq!(sets.union_of(pf).into_iter().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(sets.intersection_of(pf).into_iter().collect::<Vec<_>>(), ["B"]);
        assert!(sets.intersection_of(pf.with(Category::Project)).is_empty());
        assert!(sets.intersection_of(pf.with(Category::Center)).is_empty());
    }

    #[test]
    fn test_memberships() {
        assert_eq!(
            sets().memberships("B"),
            CategorySet::of(&[Category::Program, Category::Funder])
        );
        assert!(sets().memberships("Z").is_empty());
    }

    #[test]
    fn test_resolve_from_selection() {
        use crate::filter::CategoryRow;

        let dataset = Dataset::new().with_rows(
            Category::Center,
            vec![
                CategoryRow::new(Some("East"), Some("Kenya")),
                CategoryRow::new(Some("West"), Some("Chad")),
            ],
        );
        let selection = Selection::new().with(Category::Center, ["East"]);
        let sets = CategoryCountrySets::resolve(&dataset, &selection);

        assert_eq!(sets.active(), CategorySet::of(&[Category::Center]));
        assert!(sets.get(Category::Center).unwrap().contains("Kenya"));
        assert!(sets.get(Category::Program).is_none());
    }
}
