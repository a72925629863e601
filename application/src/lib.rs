//! Application layer for country-overlap
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::MapSettings;
pub use ports::{
    boundary_source::{BoundaryError, BoundarySource},
    map_renderer::{MapRenderError, MapRenderer, MapRequest},
    progress::{LoadProgress, NoProgress},
    status_exporter::{ExportError, StatusExporter},
    table_source::{TableError, TableSource},
};
pub use use_cases::audit_names::{AuditNamesOutput, AuditNamesUseCase};
pub use use_cases::compute_overlap::ComputeOverlapUseCase;
pub use use_cases::data_context::{DataContext, DataLoadError};
pub use use_cases::export_report::ExportReportUseCase;
pub use use_cases::render_map::{RenderMapUseCase, RenderOutcome};
