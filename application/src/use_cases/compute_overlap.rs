//! Compute Overlap use case
//!
//! One recomputation pass: resolve the selection against the memoized
//! dataset, classify, pick the headline.

use super::data_context::{DataContext, DataLoadError};
use crate::ports::progress::{LoadProgress, NoProgress};
use overlap_domain::{Category, OverlapReport, Selection};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for classifying the countries of a selection
pub struct ComputeOverlapUseCase {
    data: Arc<DataContext>,
}

impl ComputeOverlapUseCase {
    pub fn new(data: Arc<DataContext>) -> Self {
        Self { data }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, selection: &Selection) -> Result<OverlapReport, DataLoadError> {
        self.execute_with_progress(selection, &NoProgress)
    }

    /// Execute the use case with load progress callbacks
    pub fn execute_with_progress(
        &self,
        selection: &Selection,
        progress: &dyn LoadProgress,
    ) -> Result<OverlapReport, DataLoadError> {
        let dataset = self.data.dataset(progress)?;
        debug!(
            "Computing overlap for {} active categories",
            selection.active_categories().len()
        );

        let report = OverlapReport::build(&dataset, selection);

        match &report.headline {
            Some(headline) => info!("{}", headline.summary_line()),
            None => debug!("Fewer than two active categories; no headline"),
        }
        info!("Classified {} countries", report.records.len());
        Ok(report)
    }

    /// Selectable labels of a category
    pub fn choices(
        &self,
        category: Category,
        progress: &dyn LoadProgress,
    ) -> Result<Vec<String>, DataLoadError> {
        Ok(self.data.dataset(progress)?.choices(category))
    }
}
