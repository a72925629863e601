//! Label → color legend
//!
//! The legend must be closed over every label the classifier can emit;
//! an unmapped label is a configuration error caught by
//! [`Legend::validate`] before anything is drawn.

use super::color::Rgb;
use crate::core::error::DomainError;
use crate::overlap::OverlapLabel;
use std::collections::HashMap;

const DEFAULT_COLORS: [(&str, &str); 15] = [
    ("In All Four", "#2ca02c"),
    ("In Programs and Centers", "#98df8a"),
    ("In Programs and Funders", "#1f77b4"),
    ("In Programs and Projects", "#ff7f0e"),
    ("In Centers and Funders", "#9467bd"),
    ("In Centers and Projects", "#d62728"),
    ("In Funders and Projects", "#8c564b"),
    ("Only in Programs", "#ffbb78"),
    ("Only in Centers", "#c5b0d5"),
    ("Only in Funders", "#2ca02c"),
    ("Only in Projects", "#98df8a"),
    ("In Programs and Centers and Funders", "#17becf"),
    ("In Programs and Centers and Projects", "#bcbd22"),
    ("In Programs and Funders and Projects", "#e377c2"),
    ("In Centers and Funders and Projects", "#7f7f7f"),
];

/// Colors for overlap labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    colors: HashMap<OverlapLabel, Rgb>,
}

impl Default for Legend {
    fn default() -> Self {
        let colors = DEFAULT_COLORS
            .iter()
            .filter_map(|(label, color)| Some((label.parse().ok()?, color.parse().ok()?)))
            .collect();
        Self { colors }
    }
}

impl Legend {
    /// A legend with no entries
    pub fn empty() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Set the color of one label, both given as strings
    pub fn set(&mut self, label: &str, color: &str) -> Result<(), DomainError> {
        let label: OverlapLabel = label.parse()?;
        let color: Rgb = color.parse()?;
        self.colors.insert(label, color);
        Ok(())
    }

    /// Default legend with `overrides` applied
    pub fn with_overrides<'a, I>(overrides: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut legend = Self::default();
        for (label, color) in overrides {
            legend.set(label, color)?;
        }
        Ok(legend)
    }

    pub fn color_for(&self, label: OverlapLabel) -> Option<Rgb> {
        self.colors.get(&label).copied()
    }

    /// Fails on the first label without a color
    pub fn validate(&self) -> Result<(), DomainError> {
        match OverlapLabel::all().find(|l| !self.colors.contains_key(l)) {
            Some(missing) => Err(DomainError::UnmappedLabel(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Entries in label order (singles, pairs, triples, all four)
    pub fn entries(&self) -> Vec<(OverlapLabel, Rgb)> {
        let mut entries: Vec<_> = OverlapLabel::all()
            .filter_map(|l| Some((l, self.color_for(l)?)))
            .collect();
        entries.sort_by_key(|(l, _)| l.arity());
        entries
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
