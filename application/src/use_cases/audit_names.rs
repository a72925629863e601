//! Audit Names use case
//!
//! Lists table countries that have no boundary feature of the same name,
//! with advisory suggestions. Nothing is rewritten.

use super::data_context::{DataContext, DataLoadError};
use crate::ports::progress::LoadProgress;
use overlap_domain::NameAudit;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// Output of the name audit
#[derive(Debug, Clone)]
pub struct AuditNamesOutput {
    pub audit: NameAudit,
    /// Every boundary name, for reference listings
    pub boundary_names: BTreeSet<String>,
}

/// Use case for checking country names against the boundary key space
pub struct AuditNamesUseCase {
    data: Arc<DataContext>,
}

impl AuditNamesUseCase {
    pub fn new(data: Arc<DataContext>) -> Self {
        Self { data }
    }

    pub fn execute(&self, progress: &dyn LoadProgress) -> Result<AuditNamesOutput, DataLoadError> {
        let dataset = self.data.dataset(progress)?;
        let boundaries = self.data.boundaries(progress)?;

        let boundary_names = boundaries.names();
        let audit = NameAudit::run(&dataset.countries(), &boundary_names);
        info!(
            "Name audit: {} of {} table countries unmatched",
            audit.mismatches.len(),
            audit.table_countries
        );

        Ok(AuditNamesOutput {
            audit,
            boundary_names,
        })
    }
}
