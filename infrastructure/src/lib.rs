//! Infrastructure layer for country-overlap
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;
pub mod geo;
pub mod tables;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileDataConfig, FileLoggingConfig, FileMapConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use export::CsvStatusExporter;
pub use geo::{GeoJsonBoundarySource, PlottersMapRenderer};
pub use tables::{SpreadsheetTableSource, TableLocation};
