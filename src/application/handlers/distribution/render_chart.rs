//! RenderChartHandler - Produces the bell-curve PNG.

use std::sync::Arc;

use tracing::info;

use super::DistributionParams;
use crate::domain::distribution::{ChartSeries, DistributionEngine};
use crate::domain::export::ChartImage;
use crate::domain::foundation::DomainError;
use crate::ports::ChartRenderer;

/// Command to render the distribution chart.
#[derive(Debug, Clone)]
pub struct RenderChartCommand {
    pub params: DistributionParams,
}

/// Handler for rendering charts.
pub struct RenderChartHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl RenderChartHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    /// Renders the chart and returns verified PNG bytes.
    pub fn handle(&self, cmd: RenderChartCommand) -> Result<ChartImage, DomainError> {
        let request = cmd.params.to_request()?;
        let points = DistributionEngine::compute(&request);
        let png = self.renderer.render(&ChartSeries::from_points(&points))?;
        let image = ChartImage::from_png(png)?;

        info!(count = request.count(), bytes = image.len(), "Rendered chart");

        Ok(image)
    }
}
