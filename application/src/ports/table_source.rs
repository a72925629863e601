//! Table source port
//!
//! Defines how the application reads the two source tables.

use overlap_domain::SourceTable;
use thiserror::Error;

/// Errors that can occur while reading a source table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("{path} contains no worksheet")]
    NoWorksheet { path: String },

    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),
}

/// Source of the program table (`Program`, `Country`) and the portfolio
/// table (`Country`, `Center`, `Funder`, `Project Name`).
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait TableSource: Send + Sync {
    /// Load the program table
    fn load_programs(&self) -> Result<SourceTable, TableError>;

    /// Load the portfolio table
    fn load_portfolio(&self) -> Result<SourceTable, TableError>;
}
