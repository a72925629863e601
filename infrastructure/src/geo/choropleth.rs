//! Choropleth rendering with plotters
//!
//! Countries are drawn on a plain equirectangular grid. Every boundary
//! gets a neutral fill; classified countries are overdrawn with their
//! legend color at the configured opacity.

use overlap_application::{MapRenderError, MapRenderer, MapRequest};
use overlap_domain::{OverlapLabel, Rgb};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fs;
use tracing::{debug, info, warn};

const OCEAN: RGBColor = RGBColor(173, 216, 230);
const LAND: RGBColor = RGBColor(235, 235, 235);
const BORDER: RGBColor = RGBColor(120, 120, 120);

/// Renders a classification to PNG, or SVG when the path ends in `.svg`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersMapRenderer;

impl PlottersMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl MapRenderer for PlottersMapRenderer {
    fn render(&self, request: &MapRequest<'_>) -> Result<(), MapRenderError> {
        let fills = resolve_fills(request)?;
        let output = request.output;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| MapRenderError::Output {
                path: output.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let size = (request.settings.width, request.settings.height);
        let is_svg = output
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg {
            draw(SVGBackend::new(output, size).into_drawing_area(), request, &fills)?;
        } else {
            draw(BitMapBackend::new(output, size).into_drawing_area(), request, &fills)?;
        }

        info!("Map written to {}", output.display());
        Ok(())
    }
}

/// Map each classified country to its fill color
fn resolve_fills<'a>(request: &'a MapRequest<'_>) -> Result<HashMap<&'a str, Rgb>, MapRenderError> {
    request
        .classification
        .iter()
        .map(|(country, label)| {
            request
                .legend
                .color_for(label)
                .map(|color| (country, color))
                .ok_or_else(|| MapRenderError::UnmappedLabel(label.to_string()))
        })
        .collect()
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    request: &MapRequest<'_>,
    fills: &HashMap<&str, Rgb>,
) -> Result<(), MapRenderError> {
    root.fill(&OCEAN).map_err(draw_error)?;

    // Text needs a system font; without one the map is drawn untitled
    let titled = root.titled(&request.settings.title, ("sans-serif", 22));
    let area = match &titled {
        Ok(area) => area,
        Err(e) => {
            warn!("Map title skipped: {}", e);
            &root
        }
    };

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .build_cartesian_2d(-180.0f64..180.0f64, -90.0f64..90.0f64)
        .map_err(draw_error)?;

    let opacity = request.settings.opacity;
    let mut drawn = 0usize;
    for shape in request.boundaries.shapes() {
        let style = match fills.get(shape.name.as_str()) {
            Some(color) => {
                drawn += 1;
                to_plotters(*color).mix(opacity).filled()
            }
            None => LAND.filled(),
        };
        for ring in shape.exteriors() {
            chart
                .draw_series(std::iter::once(Polygon::new(ring.clone(), style)))
                .map_err(draw_error)?;
            chart
                .draw_series(std::iter::once(PathElement::new(ring.clone(), BORDER.stroke_width(1))))
                .map_err(draw_error)?;
        }
    }
    debug!("Filled {} of {} classified countries", drawn, fills.len());

    let present: HashSet<OverlapLabel> = request.classification.iter().map(|(_, l)| l).collect();
    if !present.is_empty() {
        for (label, color) in request.legend.entries() {
            if !present.contains(&label) {
                continue;
            }
            let swatch = to_plotters(color).mix(opacity);
            chart
                .draw_series(std::iter::empty::<Polygon<(f64, f64)>>())
                .map_err(draw_error)?
                .label(label.to_string())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], swatch.filled()));
        }
        if let Err(e) = chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
        {
            warn!("Map legend skipped: {}", e);
        }
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

fn to_plotters(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn draw_error(e: impl std::fmt::Display) -> MapRenderError {
    MapRenderError::Draw(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlap_application::MapSettings;
    use overlap_domain::{
        BoundaryCollection, Category, CategoryCountrySets, CountryShape, Legend, classify,
    };

    fn square(x: f64, y: f64) -> Vec<Vec<(f64, f64)>> {
        vec![vec![(x, y), (x + 10.0, y), (x + 10.0, y + 10.0), (x, y + 10.0), (x, y)]]
    }

    fn boundaries() -> BoundaryCollection {
        BoundaryCollection::new(vec![
            CountryShape::new("Kenya", vec![square(30.0, -5.0)]),
            CountryShape::new("Peru", vec![square(-80.0, -15.0)]),
            CountryShape::new("Mali", vec![square(-5.0, 10.0)]),
        ])
    }

    fn sets() -> CategoryCountrySets {
        CategoryCountrySets::default()
            .with(Category::Program, ["Kenya", "Peru"])
            .with(Category::Funder, ["Kenya"])
    }

    #[test]
    fn test_render_svg() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("maps").join("overlap.svg");
        let classification = classify(&sets());
        let settings = MapSettings::default().with_size(400, 200);
        let legend = Legend::default();
        let boundaries = boundaries();

        let request = MapRequest {
            classification: &classification,
            boundaries: &boundaries,
            legend: &legend,
            settings: &settings,
            output: &output,
        };
        PlottersMapRenderer::new().render(&request).unwrap();

        let svg = fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("polygon"));
    }

    #[test]
    fn test_render_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("overlap.png");
        let classification = classify(&sets());
        let settings = MapSettings::default().with_size(400, 200);
        let legend = Legend::default();
        let boundaries = boundaries();

        let request = MapRequest {
            classification: &classification,
            boundaries: &boundaries,
            legend: &legend,
            settings: &settings,
            output: &output,
        };
        PlottersMapRenderer::new().render(&request).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn test_unmapped_label_fails_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("overlap.svg");
        let classification = classify(&sets());
        let settings = MapSettings::default();
        let legend = Legend::empty();
        let boundaries = boundaries();

        let request = MapRequest {
            classification: &classification,
            boundaries: &boundaries,
            legend: &legend,
            settings: &settings,
            output: &output,
        };
        let result = PlottersMapRenderer::new().render(&request);

        assert!(matches!(result, Err(MapRenderError::UnmappedLabel(_))));
        assert!(!output.exists());
    }
}
