//! File export adapters

pub mod csv_exporter;

pub use csv_exporter::{CsvStatusExporter, parse_status_csv, to_csv_bytes};
