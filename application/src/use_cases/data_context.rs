//! Load-once source data
//!
//! The source tables and the boundary collection are read on first use
//! and kept for the lifetime of the process. They are never invalidated:
//! every recomputation reads the same immutable data. A failed load is
//! not cached, so the next access retries.

use crate::ports::boundary_source::{BoundaryError, BoundarySource};
use crate::ports::progress::LoadProgress;
use crate::ports::table_source::{TableError, TableSource};
use once_cell::sync::OnceCell;
use overlap_domain::{BoundaryCollection, Dataset};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading source data
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Boundary error: {0}")]
    Boundary(#[from] BoundaryError),
}

/// Memoized access to the source tables and boundaries
pub struct DataContext {
    tables: Arc<dyn TableSource>,
    boundary_source: Arc<dyn BoundarySource>,
    dataset: OnceCell<Arc<Dataset>>,
    boundaries: OnceCell<Arc<BoundaryCollection>>,
}

impl DataContext {
    pub fn new(tables: Arc<dyn TableSource>, boundary_source: Arc<dyn BoundarySource>) -> Self {
        Self {
            tables,
            boundary_source,
            dataset: OnceCell::new(),
            boundaries: OnceCell::new(),
        }
    }

    /// The dataset, loading both tables on first call
    pub fn dataset(&self, progress: &dyn LoadProgress) -> Result<Arc<Dataset>, DataLoadError> {
        self.dataset
            .get_or_try_init(|| {
                let programs = Self::tracked(progress, "program table", || {
                    self.tables.load_programs()
                })?;
                let portfolio = Self::tracked(progress, "portfolio table", || {
                    self.tables.load_portfolio()
                })?;
                info!(
                    "Loaded {} program rows and {} portfolio rows",
                    programs.len(),
                    portfolio.len()
                );
                Ok::<_, DataLoadError>(Arc::new(Dataset::from_tables(&programs, &portfolio)))
            })
            .cloned()
    }

    /// The boundary collection, loaded on first call
    pub fn boundaries(
        &self,
        progress: &dyn LoadProgress,
    ) -> Result<Arc<BoundaryCollection>, DataLoadError> {
        self.boundaries
            .get_or_try_init(|| {
                let boundaries =
                    Self::tracked(progress, "boundaries", || self.boundary_source.load())?;
                info!("Loaded {} boundary features", boundaries.len());
                Ok::<_, DataLoadError>(Arc::new(boundaries))
            })
            .cloned()
    }

    pub fn is_dataset_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    pub fn are_boundaries_loaded(&self) -> bool {
        self.boundaries.get().is_some()
    }

    fn tracked<T, E>(
        progress: &dyn LoadProgress,
        source: &str,
        load: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        debug!("Loading {}", source);
        progress.on_load_start(source);
        let result = load();
        progress.on_load_complete(source, result.is_ok());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{FakeBoundaries, FakeTables};
    use std::sync::atomic::Ordering;

    #[test]
    fn test_dataset_loads_once() {
        let tables = Arc::new(FakeTables::sample());
        let context = DataContext::new(tables.clone(), Arc::new(FakeBoundaries::sample()));

        assert!(!context.is_dataset_loaded());
        let first = context.dataset(&NoProgress).unwrap();
        let second = context.dataset(&NoProgress).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(tables.loads.load(Ordering::SeqCst), 1);
        assert!(context.is_dataset_loaded());
    }

    #[test]
    fn test_failed_load_is_retried() {
        let tables = Arc::new(FakeTables::failing());
        let context = DataContext::new(tables.clone(), Arc::new(FakeBoundaries::sample()));

        assert!(matches!(
            context.dataset(&NoProgress),
            Err(DataLoadError::Table(_))
        ));
        assert!(context.dataset(&NoProgress).is_err());
        assert_eq!(tables.loads.load(Ordering::SeqCst), 2);
        assert!(!context.is_dataset_loaded());
    }

    #[test]
    fn test_boundaries_load_once() {
        let boundaries = Arc::new(FakeBoundaries::sample());
        let context = DataContext::new(Arc::new(FakeTables::sample()), boundaries.clone());

        context.boundaries(&NoProgress).unwrap();
        context.boundaries(&NoProgress).unwrap();
        assert_eq!(boundaries.loads.load(Ordering::SeqCst), 1);
        assert!(context.are_boundaries_loaded());
    }
}
