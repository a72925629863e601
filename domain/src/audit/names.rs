//! Country-name audit
//!
//! Compares the country names used in the source tables with the names
//! of the boundary features. Suggestions are advisory: a boundary name is
//! suggested when either lowercase name contains the other.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A table country with no boundary feature of the same name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMismatch {
    pub country: String,
    pub suggestions: Vec<String>,
}

/// Result of auditing table countries against boundary names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAudit {
    pub table_countries: usize,
    pub boundary_names: usize,
    pub mismatches: Vec<NameMismatch>,
}

impl NameAudit {
    pub fn run(table_countries: &BTreeSet<String>, boundary_names: &BTreeSet<String>) -> Self {
        let mismatches = table_countries
            .difference(boundary_names)
            .map(|country| NameMismatch {
                country: country.clone(),
                suggestions: suggest(country, boundary_names),
            })
            .collect();

        Self {
            table_countries: table_countries.len(),
            boundary_names: boundary_names.len(),
            mismatches,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

fn suggest(country: &str, boundary_names: &BTreeSet<String>) -> Vec<String> {
    let needle = country.to_lowercase();
    boundary_names
        .iter()
        .filter(|name| {
            let name = name.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
        .cloned()
        .collect()
}
