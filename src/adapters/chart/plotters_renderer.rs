//! Plotters Chart Renderer - Implementation of ChartRenderer.
//!
//! Draws the bell curve with the `plotters` bitmap backend. The bitmap
//! encoder only writes to a path, so the image is rendered into a scratch
//! file and read back.

use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

use crate::domain::distribution::ChartSeries;
use crate::ports::{ChartError, ChartRenderer};

pub const CHART_TITLE: &str = "Curva de Gauss";
pub const X_AXIS_LABEL: &str = "Valor";
pub const Y_AXIS_LABEL: &str = "Porcentaje (%)";

pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// Headroom above the peak so the curve never touches the top border.
const Y_HEADROOM: f64 = 1.1;

/// Line-and-area chart renderer.
///
/// # Headless Rendering
///
/// Text needs a system font. `without_labels()` skips the caption, axis
/// descriptions and the labelled mesh so rendering works on machines with no
/// fonts installed.
///
/// # Usage
///
/// ```rust,ignore
/// let renderer = PlottersChartRenderer::new(1000, 400);
/// let png = renderer.render(&series)?;
/// ```
#[derive(Debug, Clone)]
pub struct PlottersChartRenderer {
    width: u32,
    height: u32,
    labels: bool,
}

impl PlottersChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: true,
        }
    }

    /// Disables all text rendering.
    pub fn without_labels(mut self) -> Self {
        self.labels = false;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn validate(series: &ChartSeries) -> Result<(), ChartError> {
        if series.x.len() != series.y.len() {
            return Err(ChartError::MismatchedSeries {
                x_len: series.x.len(),
                y_len: series.y.len(),
            });
        }
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        if series.pairs().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(ChartError::drawing("series contains non-finite values"));
        }
        Ok(())
    }

    /// X range of the series, widened by one on each side for a single point.
    fn x_range(series: &ChartSeries) -> (f64, f64) {
        let x_min = series.x.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = series.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if x_min >= x_max {
            (x_min - 1.0, x_max + 1.0)
        } else {
            (x_min, x_max)
        }
    }

    fn y_top(series: &ChartSeries) -> f64 {
        let peak = series.y_max();
        if peak > 0.0 {
            peak * Y_HEADROOM
        } else {
            1.0
        }
    }

    fn draw(&self, series: &ChartSeries, output_path: &Path) -> Result<(), ChartError> {
        let drawing_area =
            BitMapBackend::new(output_path, (self.width, self.height)).into_drawing_area();

        drawing_area
            .fill(&WHITE)
            .map_err(|e| ChartError::drawing(e.to_string()))?;

        let (x_min, x_max) = Self::x_range(series);
        let y_top = Self::y_top(series);

        let mut builder = ChartBuilder::on(&drawing_area);
        builder.margin(20);
        if self.labels {
            builder
                .caption(CHART_TITLE, ("sans-serif", 28))
                .x_label_area_size(45)
                .y_label_area_size(60);
        }

        let mut chart = builder
            .build_cartesian_2d(x_min..x_max, 0.0..y_top)
            .map_err(|e| ChartError::drawing(e.to_string()))?;

        if self.labels {
            chart
                .configure_mesh()
                .x_desc(X_AXIS_LABEL)
                .y_desc(Y_AXIS_LABEL)
                .label_style(("sans-serif", 16))
                .draw()
                .map_err(|e| ChartError::drawing(e.to_string()))?;
        }

        chart
            .draw_series(AreaSeries::new(series.pairs(), 0.0, BLUE.mix(0.3)))
            .map_err(|e| ChartError::drawing(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(series.pairs(), BLUE.stroke_width(2)))
            .map_err(|e| ChartError::drawing(e.to_string()))?;

        drawing_area
            .present()
            .map_err(|e| ChartError::drawing(e.to_string()))?;

        Ok(())
    }
}

impl Default for PlottersChartRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)
    }
}

impl ChartRenderer for PlottersChartRenderer {
    fn render(&self, series: &ChartSeries) -> Result<Vec<u8>, ChartError> {
        Self::validate(series)?;

        let scratch = tempfile::Builder::new()
            .prefix("gauss-chart-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| ChartError::io(format!("Failed to create scratch file: {}", e)))?;

        self.draw(series, scratch.path())?;

        let bytes = std::fs::read(scratch.path()).map_err(|e| {
            ChartError::io(format!(
                "Failed to read rendered chart {}: {}",
                scratch.path().display(),
                e
            ))
        })?;

        debug!(
            points = series.len(),
            width = self.width,
            height = self.height,
            bytes = bytes.len(),
            "Rendered distribution chart"
        );

        Ok(bytes)
    }
}
