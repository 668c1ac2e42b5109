//! ExportDistributionHandler - Command handler for spreadsheet exports.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::handlers::distribution::DistributionParams;
use crate::domain::distribution::{ChartSeries, DistributionEngine};
use crate::domain::export::{Annotation, ChartImage, ExportEncoder, ExportLayout, ExportPayload};
use crate::domain::foundation::{DomainError, RoundingPolicy};
use crate::ports::{ChartRenderer, Clock, ExportStorage, ExportedWorkbook, SpreadsheetWriter};

/// Command to export a distribution.
#[derive(Debug, Clone)]
pub struct ExportDistributionCommand {
    pub params: DistributionParams,
    pub layout: ExportLayout,
    pub rounding: RoundingPolicy,
    /// Raw note text. Only written by layouts that embed annotations.
    pub annotation: Option<String>,
}

/// Result of saving an export.
#[derive(Debug, Clone)]
pub struct SavedExport {
    pub workbook: ExportedWorkbook,
    pub path: PathBuf,
}

/// Handler for spreadsheet exports.
///
/// Each call recomputes the distribution from the command, renders the chart
/// when the layout embeds one, and returns the complete workbook. Nothing is
/// cached between calls and nothing is retried.
pub struct ExportDistributionHandler {
    renderer: Arc<dyn ChartRenderer>,
    writer: Arc<dyn SpreadsheetWriter>,
    clock: Arc<dyn Clock>,
}

impl ExportDistributionHandler {
    pub fn new(
        renderer: Arc<dyn ChartRenderer>,
        writer: Arc<dyn SpreadsheetWriter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            renderer,
            writer,
            clock,
        }
    }

    pub fn handle(&self, cmd: ExportDistributionCommand) -> Result<ExportedWorkbook, DomainError> {
        // 1. Validate and compute
        let request = cmd.params.to_request()?;
        let points = DistributionEngine::compute(&request);

        // 2. Assemble the payload
        let annotation = match (&cmd.annotation, cmd.layout.embeds_annotation()) {
            (Some(raw), true) => Annotation::parse(raw)?,
            (Some(_), false) => {
                debug!(layout = %cmd.layout, "Layout has no annotation block, ignoring note");
                None
            }
            (None, _) => None,
        };

        let mut payload = ExportPayload::new(points, self.clock.today()).with_annotation(annotation);

        if cmd.layout.embeds_chart() {
            let png = self
                .renderer
                .render(&ChartSeries::from_points(payload.points()))?;
            payload = payload.with_chart_image(ChartImage::from_png(png)?);
        }

        // 3. Encode and write
        let plan = ExportEncoder::for_layout(cmd.layout, cmd.rounding).encode(&payload)?;
        let content = self.writer.write(&plan, payload.generated_date())?;

        info!(
            count = request.count(),
            layout = %cmd.layout,
            rounding = %cmd.rounding,
            bytes = content.len(),
            filename = %payload.filename(),
            "Exported distribution"
        );

        Ok(ExportedWorkbook::new(content, payload.filename(), cmd.layout))
    }

    /// Exports and persists the workbook.
    pub fn save(
        &self,
        cmd: ExportDistributionCommand,
        storage: &dyn ExportStorage,
    ) -> Result<SavedExport, DomainError> {
        let workbook = self.handle(cmd)?;
        let path = storage.save(&workbook.filename, &workbook.content)?;
        Ok(SavedExport { workbook, path })
    }
}
