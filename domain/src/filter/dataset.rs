//! Source dataset and the filter selector
//!
//! [`Dataset`] holds, for every category, the `(value, country)` pairs
//! taken from the source tables. Programs come from the program table;
//! centers, funders and projects come from the portfolio table.
//!
//! Resolution is exact and case-sensitive: a selected label matches the
//! rows whose category value equals it, and unknown labels match nothing.

use super::category::Category;
use super::table::SourceTable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Column header holding the country name in both tables
pub const COUNTRY_COLUMN: &str = "Country";

/// One row projected onto a single category column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub value: Option<String>,
    pub country: Option<String>,
}

impl CategoryRow {
    pub fn new(value: Option<&str>, country: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            country: country.map(str::to_string),
        }
    }
}

/// A selected label together with a country it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub label: String,
    pub country: String,
}

/// Immutable source data for all four categories
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: [Vec<CategoryRow>; 4],
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the dataset from the program table (`Program`, `Country`)
    /// and the portfolio table (`Country`, `Center`, `Funder`, `Project Name`).
    ///
    /// A missing column yields rows with a blank value for that column.
    pub fn from_tables(programs: &SourceTable, portfolio: &SourceTable) -> Self {
        let mut dataset = Self::new();
        dataset.rows[Category::Program.index()] = Self::project(programs, Category::Program);
        for category in [Category::Center, Category::Funder, Category::Project] {
            dataset.rows[category.index()] = Self::project(portfolio, category);
        }
        dataset
    }

    fn project(table: &SourceTable, category: Category) -> Vec<CategoryRow> {
        let value_col = table.column(category.column());
        let country_col = table.column(COUNTRY_COLUMN);
        (0..table.len())
            .map(|row| {
                CategoryRow::new(
                    value_col.and_then(|c| table.cell(row, c)),
                    country_col.and_then(|c| table.cell(row, c)),
                )
            })
            .collect()
    }

    /// Builder: replace the rows of one category
    pub fn with_rows(mut self, category: Category, rows: Vec<CategoryRow>) -> Self {
        self.rows[category.index()] = rows;
        self
    }

    pub fn rows(&self, category: Category) -> &[CategoryRow] {
        &self.rows[category.index()]
    }

    /// Sorted distinct non-blank values of a category column
    pub fn choices(&self, category: Category) -> Vec<String> {
        self.rows(category)
            .iter()
            .filter_map(|r| r.value.as_deref())
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Countries of the rows whose category value is one of `labels`.
    ///
    /// An empty `labels` slice yields an empty set, not every country.
    pub fn resolve(&self, category: Category, labels: &[String]) -> BTreeSet<String> {
        if labels.is_empty() {
            return BTreeSet::new();
        }
        self.matching_rows(category, labels)
            .filter_map(|r| r.country.clone())
            .collect()
    }

    /// Distinct `(label, country)` pairs of the matching rows, first-seen order
    pub fn associations(&self, category: Category, labels: &[String]) -> Vec<Association> {
        let mut seen = HashSet::new();
        self.matching_rows(category, labels)
            .filter_map(|r| {
                let label = r.value.as_deref()?;
                let country = r.country.as_deref()?;
                seen.insert((label, country)).then(|| Association {
                    label: label.to_string(),
                    country: country.to_string(),
                })
            })
            .collect()
    }

    /// Every non-null country in either table
    pub fn countries(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .flatten()
            .filter_map(|r| r.country.clone())
            .collect()
    }

    fn matching_rows<'a>(
        &'a self,
        category: Category,
        labels: &'a [String],
    ) -> impl Iterator<Item = &'a CategoryRow> + 'a {
        self.rows(category).iter().filter(move |r| {
            r.value
                .as_deref()
                .is_some_and(|v| labels.iter().any(|l| l == v))
        })
    }
}
