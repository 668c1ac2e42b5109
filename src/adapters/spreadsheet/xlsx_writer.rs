//! Xlsx Spreadsheet Writer - Implementation of SpreadsheetWriter.
//!
//! Serializes a [`SheetPlan`] with `rust_xlsxwriter`. The document creation
//! timestamp is pinned to the export date, so the same plan and date always
//! produce the same bytes.

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Image, Workbook, XlsxError};
use tracing::debug;

use crate::domain::export::{CellValue, ExportError, NumberFormat, SheetPlan};
use crate::ports::SpreadsheetWriter;

/// `.xlsx` writer backed by `rust_xlsxwriter`.
#[derive(Debug, Clone, Default)]
pub struct XlsxSpreadsheetWriter;

impl XlsxSpreadsheetWriter {
    pub fn new() -> Self {
        Self
    }

    fn properties(generated_date: NaiveDate) -> Result<DocProperties, ExportError> {
        // Years outside Excel's calendar are not representable.
        let year = u16::try_from(generated_date.year())
            .map_err(|_| ExportError::writer(format!("Unsupported year {}", generated_date.year())))?;
        let created = ExcelDateTime::from_ymd(
            year,
            generated_date.month() as u8,
            generated_date.day() as u8,
        )
        .map_err(writer_error)?;

        Ok(DocProperties::new().set_creation_datetime(&created))
    }

    fn build(plan: &SheetPlan, generated_date: NaiveDate) -> Result<Workbook, ExportError> {
        let mut workbook = Workbook::new();
        workbook.set_properties(&Self::properties(generated_date)?);

        let integer = Format::new().set_num_format(NumberFormat::Integer.pattern());
        let two_decimals = Format::new().set_num_format(NumberFormat::TwoDecimals.pattern());

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(plan.name()).map_err(writer_error)?;

        for cell in plan.cells() {
            match &cell.value {
                CellValue::Text(text) => {
                    worksheet
                        .write_string(cell.row, cell.col, text)
                        .map_err(writer_error)?;
                }
                CellValue::Number { value, format } => {
                    let format = match format {
                        NumberFormat::Integer => &integer,
                        NumberFormat::TwoDecimals => &two_decimals,
                    };
                    worksheet
                        .write_number_with_format(cell.row, cell.col, *value, format)
                        .map_err(writer_error)?;
                }
            }
        }

        for placed in plan.images() {
            let image = Image::new_from_buffer(placed.image.as_bytes())
                .map_err(|e| ExportError::unreadable_image(e.to_string()))?;
            worksheet
                .insert_image(placed.row, placed.col, &image)
                .map_err(writer_error)?;
        }

        Ok(workbook)
    }
}

impl SpreadsheetWriter for XlsxSpreadsheetWriter {
    fn write(&self, plan: &SheetPlan, generated_date: NaiveDate) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Self::build(plan, generated_date)?;
        let bytes = workbook.save_to_buffer().map_err(writer_error)?;

        debug!(
            sheet = plan.name(),
            cells = plan.cells().len(),
            images = plan.images().len(),
            bytes = bytes.len(),
            "Wrote xlsx workbook"
        );

        Ok(bytes)
    }
}

fn writer_error(err: XlsxError) -> ExportError {
    ExportError::writer(err.to_string())
}
