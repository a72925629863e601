//! Headline overlap selection
//!
//! When two or more categories are active, a single combination is
//! reported as the headline. The combination is picked from a fixed,
//! priority-ordered rule table: the first rule whose categories are all
//! active wins. Three-way rules precede pairs, so a pair rule can only
//! fire when exactly two categories are active.

use super::country_sets::CategoryCountrySets;
use crate::filter::{Category, CategorySet};
use serde::{Deserialize, Serialize};

use crate::filter::Category::{Center, Funder, Program, Project};

/// A combination of categories eligible for the headline
#[derive(Debug, Clone, Copy)]
pub struct HeadlineRule {
    pub categories: &'static [Category],
    pub label: &'static str,
}

impl HeadlineRule {
    pub fn required(&self) -> CategorySet {
        CategorySet::of(self.categories)
    }

    pub fn matches(&self, active: CategorySet) -> bool {
        self.required().is_subset(active)
    }
}

/// Rules in priority order
pub const HEADLINE_RULES: [HeadlineRule; 11] = [
    HeadlineRule {
        categories: &[Program, Center, Funder, Project],
        label: "In All Four",
    },
    HeadlineRule {
        categories: &[Program, Center, Funder],
        label: "In Programs, Centers and Funders",
    },
    HeadlineRule {
        categories: &[Program, Center, Project],
        label: "In Programs, Centers and Projects",
    },
    HeadlineRule {
        categories: &[Program, Funder, Project],
        label: "In Programs, Funders and Projects",
    },
    HeadlineRule {
        categories: &[Center, Funder, Project],
        label: "In Centers, Funders and Projects",
    },
    HeadlineRule {
        categories: &[Program, Center],
        label: "In Programs and Centers",
    },
    HeadlineRule {
        categories: &[Program, Funder],
        label: "In Programs and Funders",
    },
    HeadlineRule {
        categories: &[Center, Project],
        label: "In Centers and Projects",
    },
    HeadlineRule {
        categories: &[Center, Funder],
        label: "In Centers and Funders",
    },
    HeadlineRule {
        categories: &[Funder, Project],
        label: "In Funders and Projects",
    },
    HeadlineRule {
        categories: &[Program, Project],
        label: "In Programs and Projects",
    },
];

/// The reported overlap between the chosen categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineOverlap {
    pub categories: CategorySet,
    pub overlap_count: usize,
    pub overlap_percentage: f64,
    pub label: String,
}

impl HeadlineOverlap {
    /// e.g. `In Programs and Funders: 33.33% (1 Countries)`
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {:.2}% ({} Countries)",
            self.label, self.overlap_percentage, self.overlap_count
        )
    }
}

/// `100 * part / whole`, or 0 when `whole` is 0
pub fn overlap_percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Pick the headline combination for the active categories of `sets`.
///
/// Returns `None` when fewer than two categories are active.
pub fn select_headline(sets: &CategoryCountrySets) -> Option<HeadlineOverlap> {
    let active = sets.active();
    if active.len() < 2 {
        return None;
    }

    let rule = HEADLINE_RULES.iter().find(|r| r.matches(active))?;
    let categories = rule.required();
    let intersection = sets.intersection_of(categories).len();
    let union = sets.union_of(categories).len();

    Some(HeadlineOverlap {
        categories,
        overlap_count: intersection,
        overlap_percentage: overlap_percentage(intersection, union),
        label: rule.label.to_string(),
    })
}
