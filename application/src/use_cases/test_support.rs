//! In-memory port implementations shared by use case tests

use crate::ports::boundary_source::{BoundaryError, BoundarySource};
use crate::ports::map_renderer::{MapRenderError, MapRenderer, MapRequest};
use crate::ports::status_exporter::{ExportError, StatusExporter};
use crate::ports::table_source::{TableError, TableSource};
use overlap_domain::{BoundaryCollection, CountryShape, SourceTable, StatusRecord};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FakeTables {
    pub loads: AtomicUsize,
    fail: bool,
}

impl FakeTables {
    pub fn sample() -> Self {
        Self {
            loads: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            loads: AtomicUsize::new(0),
            fail: true,
        }
    }
}

impl TableSource for FakeTables {
    fn load_programs(&self) -> Result<SourceTable, TableError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TableError::Read {
                path: "programs.xlsx".to_string(),
                message: "missing".to_string(),
            });
        }
        Ok(SourceTable::new(vec!["Program".into(), "Country".into()])
            .with_row(&["Health", "Kenya"])
            .with_row(&["Health", "Peru"])
            .with_row(&["Water", "Chad"]))
    }

    fn load_portfolio(&self) -> Result<SourceTable, TableError> {
        Ok(SourceTable::new(vec![
            "Country".into(),
            "Center".into(),
            "Funder".into(),
            "Project Name".into(),
        ])
        .with_row(&["Kenya", "East", "Gates", "Wells"])
        .with_row(&["Atlantis", "East", "", ""])
        .with_row(&["Chad", "West", "Gates", "Roads"]))
    }
}

pub struct FakeBoundaries {
    pub loads: AtomicUsize,
}

impl FakeBoundaries {
    pub fn sample() -> Self {
        Self {
            loads: AtomicUsize::new(0),
        }
    }
}

impl BoundarySource for FakeBoundaries {
    fn load(&self) -> Result<BoundaryCollection, BoundaryError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let square = vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]];
        Ok(BoundaryCollection::new(
            ["Kenya", "Peru", "Chad", "Mali"]
                .into_iter()
                .map(|name| CountryShape::new(name, vec![square.clone()]))
                .collect(),
        ))
    }
}

/// Records rendered country counts; fails when `fail` is set
pub struct FakeRenderer {
    pub rendered: Mutex<Vec<usize>>,
    pub fail: bool,
}

impl FakeRenderer {
    pub fn new(fail: bool) -> Self {
        Self {
            rendered: Mutex::new(Vec::new()),
            fail,
        }
    }
}

impl MapRenderer for FakeRenderer {
    fn render(&self, request: &MapRequest<'_>) -> Result<(), MapRenderError> {
        if self.fail {
            return Err(MapRenderError::Draw("backend unavailable".to_string()));
        }
        self.rendered
            .lock()
            .unwrap()
            .push(request.classification.len());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeExporter {
    pub written: Mutex<Vec<StatusRecord>>,
}

impl StatusExporter for FakeExporter {
    fn export(&self, records: &[StatusRecord], _path: &Path) -> Result<(), ExportError> {
        self.written.lock().unwrap().extend_from_slice(records);
        Ok(())
    }
}
