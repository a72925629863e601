//! Boundary source port

use overlap_domain::BoundaryCollection;
use thiserror::Error;

/// Errors that can occur while reading country boundaries
#[derive(Error, Debug)]
pub enum BoundaryError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid boundary data in {path}: {message}")]
    Invalid { path: String, message: String },
}

/// Source of the country-boundary feature collection
pub trait BoundarySource: Send + Sync {
    fn load(&self) -> Result<BoundaryCollection, BoundaryError>;
}
