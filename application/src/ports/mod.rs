//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod boundary_source;
pub mod map_renderer;
pub mod progress;
pub mod status_exporter;
pub mod table_source;
