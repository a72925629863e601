//! Country boundary shapes
//!
//! Geometry is keyed by the exact country name; no fuzzy matching
//! happens at this layer.

use std::collections::BTreeSet;

/// A closed ring of `(longitude, latitude)` points
pub type Ring = Vec<(f64, f64)>;

/// A polygon: exterior ring first, then holes
pub type PolygonRings = Vec<Ring>;

/// The outline of one named feature
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    pub name: String,
    pub polygons: Vec<PolygonRings>,
}

impl CountryShape {
    pub fn new(name: impl Into<String>, polygons: Vec<PolygonRings>) -> Self {
        Self {
            name: name.into(),
            polygons,
        }
    }

    /// Exterior rings of every polygon
    pub fn exteriors(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().filter_map(|p| p.first())
    }
}

/// All boundary features of the map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryCollection {
    shapes: Vec<CountryShape>,
}

impl BoundaryCollection {
    pub fn new(shapes: Vec<CountryShape>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[CountryShape] {
        &self.shapes
    }

    pub fn names(&self) -> BTreeSet<String> {
        self.shapes.iter().map(|s| s.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.iter().any(|s| s.name == name)
    }

    /// Countries from `countries` with no feature of the same name
    pub fn unmatched<'a>(&self, countries: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let names = self.names();
        countries
            .into_iter()
            .filter(|c| !names.contains(*c))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
