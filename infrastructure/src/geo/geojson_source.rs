//! GeoJSON-backed [`BoundarySource`]
//!
//! Reads a `FeatureCollection` and keys every feature by a string
//! property (`name` by default). Features without that property are
//! skipped; only polygon geometry is kept.

use crate::config::FileDataConfig;
use geojson::{GeoJson, Geometry, Value};
use overlap_application::{BoundaryError, BoundarySource};
use overlap_domain::{BoundaryCollection, CountryShape, PolygonRings};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Loads country boundaries from a GeoJSON file
#[derive(Debug, Clone)]
pub struct GeoJsonBoundarySource {
    path: PathBuf,
    name_property: String,
}

impl GeoJsonBoundarySource {
    pub fn new(path: impl Into<PathBuf>, name_property: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name_property: name_property.into(),
        }
    }

    pub fn from_config(config: &FileDataConfig) -> Self {
        Self::new(&config.boundaries, &config.boundary_name_property)
    }
}

impl BoundarySource for GeoJsonBoundarySource {
    fn load(&self) -> Result<BoundaryCollection, BoundaryError> {
        let display = self.path.display().to_string();
        let contents = fs::read_to_string(&self.path).map_err(|e| BoundaryError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let geojson: GeoJson = contents.parse().map_err(|e: geojson::Error| BoundaryError::Invalid {
            path: display.clone(),
            message: e.to_string(),
        })?;
        parse_boundaries(geojson, &self.name_property).map_err(|message| BoundaryError::Invalid {
            path: display,
            message,
        })
    }
}

/// Convert a feature collection into named shapes
pub fn parse_boundaries(geojson: GeoJson, name_property: &str) -> Result<BoundaryCollection, String> {
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err("expected a FeatureCollection".to_string());
    };

    let mut shapes = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        let Some(name) = feature.property(name_property).and_then(|v| v.as_str()) else {
            debug!("Skipping feature without '{}' property", name_property);
            continue;
        };
        let mut polygons = Vec::new();
        if let Some(geometry) = &feature.geometry {
            collect_polygons(geometry, &mut polygons);
        }
        shapes.push(CountryShape::new(name, polygons));
    }
    Ok(BoundaryCollection::new(shapes))
}

fn collect_polygons(geometry: &Geometry, out: &mut Vec<PolygonRings>) {
    match &geometry.value {
        Value::Polygon(rings) => out.push(to_rings(rings)),
        Value::MultiPolygon(polygons) => out.extend(polygons.iter().map(|p| to_rings(p))),
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_polygons(geometry, out);
            }
        }
        _ => {}
    }
}

fn to_rings(rings: &[Vec<Vec<f64>>]) -> PolygonRings {
    rings
        .iter()
        .map(|ring| {
            ring.iter()
                .filter(|position| position.len() >= 2)
                .map(|position| (position[0], position[1]))
                .collect()
        })
        .collect()
}
