//! Render Map use case
//!
//! Draws a report as a choropleth. Rendering never aborts the caller:
//! any failure (boundary loading included) comes back as
//! [`RenderOutcome::Failed`] so tables and exports still go out.

use super::data_context::DataContext;
use crate::config::MapSettings;
use crate::ports::map_renderer::{MapRenderer, MapRequest};
use crate::ports::progress::LoadProgress;
use overlap_domain::{DomainError, Legend, OverlapReport};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a render attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Map written; `unmatched` countries have no boundary feature
    Rendered { path: PathBuf, unmatched: Vec<String> },
    /// Drawing failed with a user-facing message
    Failed(String),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

/// Use case for drawing the choropleth map
pub struct RenderMapUseCase {
    data: Arc<DataContext>,
    renderer: Arc<dyn MapRenderer>,
    legend: Legend,
    settings: MapSettings,
}

impl RenderMapUseCase {
    /// Fails fast when the legend does not cover every label
    pub fn new(
        data: Arc<DataContext>,
        renderer: Arc<dyn MapRenderer>,
        legend: Legend,
        settings: MapSettings,
    ) -> Result<Self, DomainError> {
        legend.validate()?;
        Ok(Self {
            data,
            renderer,
            legend,
            settings,
        })
    }

    pub fn execute(
        &self,
        report: &OverlapReport,
        output: &Path,
        progress: &dyn LoadProgress,
    ) -> RenderOutcome {
        let boundaries = match self.data.boundaries(progress) {
            Ok(boundaries) => boundaries,
            Err(e) => {
                warn!("Cannot load boundaries: {}", e);
                return RenderOutcome::Failed(format!("Error creating visualization: {}", e));
            }
        };

        let classification = report.classification();
        let unmatched = boundaries.unmatched(classification.countries());
        for country in &unmatched {
            warn!("No boundary named '{}'; it is left off the map", country);
        }

        let request = MapRequest {
            classification,
            boundaries: &boundaries,
            legend: &self.legend,
            settings: &self.settings,
            output,
        };

        match self.renderer.render(&request) {
            Ok(()) => {
                info!("Map written to {}", output.display());
                RenderOutcome::Rendered {
                    path: output.to_path_buf(),
                    unmatched,
                }
            }
            Err(e) => {
                warn!("Map rendering failed: {}", e);
                RenderOutcome::Failed(format!("Error creating visualization: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{FakeBoundaries, FakeRenderer, FakeTables};
    use overlap_domain::{Category, Selection};

    fn context() -> Arc<DataContext> {
        Arc::new(DataContext::new(
            Arc::new(FakeTables::sample()),
            Arc::new(FakeBoundaries::sample()),
        ))
    }

    fn report(data: &DataContext) -> OverlapReport {
        let selection = Selection::new().with(Category::Center, ["East"]);
        OverlapReport::build(&data.dataset(&NoProgress).unwrap(), &selection)
    }

    #[test]
    fn test_incomplete_legend_fails_fast() {
        let result = RenderMapUseCase::new(
            context(),
            Arc::new(FakeRenderer::new(false)),
            Legend::empty(),
            MapSettings::default(),
        );
        assert!(matches!(result, Err(DomainError::UnmappedLabel(_))));
    }

    #[test]
    fn test_render_reports_unmatched_countries() {
        let data = context();
        let renderer = Arc::new(FakeRenderer::new(false));
        let use_case = RenderMapUseCase::new(
            data.clone(),
            renderer.clone(),
            Legend::default(),
            MapSettings::default(),
        )
        .unwrap();

        let outcome = use_case.execute(&report(&data), Path::new("map.png"), &NoProgress);
        assert_eq!(
            outcome,
            RenderOutcome::Rendered {
                path: PathBuf::from("map.png"),
                unmatched: vec!["Atlantis".to_string()],
            }
        );
        assert_eq!(*renderer.rendered.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_renderer_failure_becomes_message() {
        let data = context();
        let use_case = RenderMapUseCase::new(
            data.clone(),
            Arc::new(FakeRenderer::new(true)),
            Legend::default(),
            MapSettings::default(),
        )
        .unwrap();

        let outcome = use_case.execute(&report(&data), Path::new("map.png"), &NoProgress);
        match outcome {
            RenderOutcome::Failed(message) => {
                assert!(message.starts_with("Error creating visualization"));
                assert!(message.contains("backend unavailable"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
