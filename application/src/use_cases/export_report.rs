//! Export Report use case

use crate::ports::status_exporter::{ExportError, StatusExporter};
use overlap_domain::OverlapReport;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Use case for writing the `(Country, Status)` table to a file
pub struct ExportReportUseCase {
    exporter: Arc<dyn StatusExporter>,
}

impl ExportReportUseCase {
    pub fn new(exporter: Arc<dyn StatusExporter>) -> Self {
        Self { exporter }
    }

    /// Returns the number of rows written
    pub fn execute(&self, report: &OverlapReport, path: &Path) -> Result<usize, ExportError> {
        self.exporter.export(&report.records, path)?;
        info!("Exported {} rows to {}", report.records.len(), path.display());
        Ok(report.records.len())
    }
}
