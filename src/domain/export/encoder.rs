//! Export Encoder - Builds the sheet plan for a payload.
//!
//! The encoder is a short pipeline of independent steps. A layout is just the
//! list of steps it runs:
//!
//! | Layout | Steps |
//! |---|---|
//! | Vertical | vertical table |
//! | Horizontal | horizontal table, chart embed, annotation embed |
//!
//! The annotation step is a no-op when the payload has no annotation.

use tracing::debug;

use super::{
    ExportError, ExportLayout, ExportPayload, NumberFormat, SheetPlan, MAX_SHEET_COLUMNS,
    MAX_SHEET_ROWS,
};
use crate::domain::distribution::PresentationStage;
use crate::domain::foundation::RoundingPolicy;

pub const HEADER_INDEX: &str = "X";
pub const HEADER_PERCENTAGE: &str = "Porcentaje (%)";
pub const HEADER_QUANTITY: &str = "Cajas estimadas";
pub const ANNOTATION_LABEL: &str = "Descripción:";

/// Data rows of the horizontal table (percentage, quantity).
pub const HORIZONTAL_DATA_ROWS: u32 = 2;

/// Blank rows between the horizontal table and the chart.
pub const CHART_ROW_GAP: u32 = 3;

/// Row where the chart and the annotation label start: 2 + 3.
pub const CHART_ANCHOR_ROW: u32 = HORIZONTAL_DATA_ROWS + CHART_ROW_GAP;

pub const CHART_ANCHOR_COL: u16 = 0;

/// Ninth column.
pub const ANNOTATION_COL: u16 = 8;

/// One stage of the encoding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeStep {
    VerticalTable,
    HorizontalTable,
    EmbedChart { row: u32, col: u16 },
    EmbedAnnotation { row: u32, col: u16 },
}

/// Turns an [`ExportPayload`] into a [`SheetPlan`].
#[derive(Debug, Clone)]
pub struct ExportEncoder {
    layout: ExportLayout,
    stage: PresentationStage,
    steps: Vec<EncodeStep>,
}

impl ExportEncoder {
    /// Builds the pipeline for a layout.
    pub fn for_layout(layout: ExportLayout, rounding: RoundingPolicy) -> Self {
        let steps = match layout {
            ExportLayout::Vertical => vec![EncodeStep::VerticalTable],
            ExportLayout::Horizontal => vec![
                EncodeStep::HorizontalTable,
                EncodeStep::EmbedChart {
                    row: CHART_ANCHOR_ROW,
                    col: CHART_ANCHOR_COL,
                },
                EncodeStep::EmbedAnnotation {
                    row: CHART_ANCHOR_ROW,
                    col: ANNOTATION_COL,
                },
            ],
        };

        Self {
            layout,
            stage: PresentationStage::new(rounding),
            steps,
        }
    }

    pub fn layout(&self) -> ExportLayout {
        self.layout
    }

    pub fn steps(&self) -> &[EncodeStep] {
        &self.steps
    }

    /// Runs every step in order.
    ///
    /// # Errors
    ///
    /// Fails without producing a plan if a step fails; see [`ExportError`].
    pub fn encode(&self, payload: &ExportPayload) -> Result<SheetPlan, ExportError> {
        let mut sheet = SheetPlan::new(self.layout.sheet_name());

        for step in &self.steps {
            match *step {
                EncodeStep::VerticalTable => self.write_vertical_table(payload, &mut sheet)?,
                EncodeStep::HorizontalTable => self.write_horizontal_table(payload, &mut sheet)?,
                EncodeStep::EmbedChart { row, col } => {
                    Self::embed_chart(payload, &mut sheet, row, col)?
                }
                EncodeStep::EmbedAnnotation { row, col } => {
                    Self::embed_annotation(payload, &mut sheet, row, col)
                }
            }
        }

        debug!(
            layout = %self.layout,
            cells = sheet.cells().len(),
            images = sheet.images().len(),
            "Encoded sheet plan"
        );

        Ok(sheet)
    }

    fn write_vertical_table(
        &self,
        payload: &ExportPayload,
        sheet: &mut SheetPlan,
    ) -> Result<(), ExportError> {
        let required = payload.points().len() as u64 + 1;
        if required > u64::from(MAX_SHEET_ROWS) {
            return Err(ExportError::TooManyRows {
                required: u32::try_from(required).unwrap_or(u32::MAX),
                max: MAX_SHEET_ROWS,
            });
        }

        sheet.write_text(0, 0, HEADER_INDEX);
        sheet.write_text(0, 1, HEADER_PERCENTAGE);
        sheet.write_text(0, 2, HEADER_QUANTITY);

        for (row, point) in (1u32..).zip(self.stage.present(payload.points())) {
            sheet.write_number(row, 0, f64::from(point.index), NumberFormat::Integer);
            sheet.write_number(row, 1, point.percentage, NumberFormat::TwoDecimals);
            sheet.write_number(row, 2, point.allocated_quantity, NumberFormat::Integer);
        }

        Ok(())
    }

    fn write_horizontal_table(
        &self,
        payload: &ExportPayload,
        sheet: &mut SheetPlan,
    ) -> Result<(), ExportError> {
        // One label column plus one column per point.
        let required = payload.points().len() as u64 + 1;
        if required > u64::from(MAX_SHEET_COLUMNS) {
            return Err(ExportError::TooManyColumns {
                required: u32::try_from(required).unwrap_or(u32::MAX),
                max: MAX_SHEET_COLUMNS,
            });
        }

        sheet.write_text(1, 0, HEADER_PERCENTAGE);
        sheet.write_text(2, 0, HEADER_QUANTITY);

        for (col, point) in (1u16..).zip(self.stage.present(payload.points())) {
            sheet.write_text(0, col, format!("X{}", point.index));
            sheet.write_number(1, col, point.percentage, NumberFormat::TwoDecimals);
            sheet.write_number(2, col, point.allocated_quantity, NumberFormat::Integer);
        }

        Ok(())
    }

    fn embed_chart(
        payload: &ExportPayload,
        sheet: &mut SheetPlan,
        row: u32,
        col: u16,
    ) -> Result<(), ExportError> {
        let image = payload
            .chart_image()
            .ok_or(ExportError::MissingChartImage)?;
        sheet.insert_image(row, col, image.clone());
        Ok(())
    }

    fn embed_annotation(payload: &ExportPayload, sheet: &mut SheetPlan, row: u32, col: u16) {
        let Some(annotation) = payload.annotation() else {
            return;
        };

        sheet.write_text(row, col, ANNOTATION_LABEL);
        for (line_row, line) in (row + 1..).zip(annotation.lines()) {
            sheet.write_text(line_row, col, line);
        }
    }
}
