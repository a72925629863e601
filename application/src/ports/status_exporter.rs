//! Status export port

use overlap_domain::StatusRecord;
use std::path::Path;
use thiserror::Error;

/// Errors raised while exporting status records
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cannot write {path}: {message}")]
    Write { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Serialize(String),
}

/// Writes `(Country, Status)` records to a file
pub trait StatusExporter: Send + Sync {
    fn export(&self, records: &[StatusRecord], path: &Path) -> Result<(), ExportError>;
}
