//! Map renderer port
//!
//! Defines the contract for drawing a classification as a choropleth.

use crate::config::MapSettings;
use overlap_domain::{BoundaryCollection, ClassificationResult, Legend};
use std::path::Path;
use thiserror::Error;

/// Errors raised while drawing the map
#[derive(Error, Debug)]
pub enum MapRenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("Cannot write {path}: {message}")]
    Output { path: String, message: String },

    #[error("Label '{0}' has no legend color")]
    UnmappedLabel(String),
}

/// Everything a renderer needs for one map
pub struct MapRequest<'a> {
    pub classification: &'a ClassificationResult,
    pub boundaries: &'a BoundaryCollection,
    pub legend: &'a Legend,
    pub settings: &'a MapSettings,
    pub output: &'a Path,
}

/// Draws a classified map to a file
///
/// Countries without a boundary feature of the same name are skipped by
/// the renderer; reporting them is the caller's concern.
pub trait MapRenderer: Send + Sync {
    fn render(&self, request: &MapRequest<'_>) -> Result<(), MapRenderError>;
}
