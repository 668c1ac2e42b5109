//! Export Module - Spreadsheet layout of a computed distribution.
//!
//! The encoder is pure: it turns an [`ExportPayload`] into a [`SheetPlan`]
//! describing every cell and image. Producing `.xlsx` bytes from the plan is
//! the job of a `SpreadsheetWriter` adapter.

mod encoder;
mod errors;
mod layout;
mod payload;
mod sheet;

pub use encoder::{
    EncodeStep, ExportEncoder, ANNOTATION_COL, ANNOTATION_LABEL, CHART_ANCHOR_COL,
    CHART_ANCHOR_ROW, HEADER_INDEX, HEADER_PERCENTAGE, HEADER_QUANTITY,
};
pub use errors::ExportError;
pub use layout::{
    export_filename, ExportLayout, HORIZONTAL_SHEET_NAME, VERTICAL_SHEET_NAME, XLSX_CONTENT_TYPE,
};
pub use payload::{Annotation, ChartImage, ExportPayload, MAX_CELL_CHARS, PNG_SIGNATURE};
pub use sheet::{
    CellValue, NumberFormat, PlacedCell, PlacedImage, SheetPlan, MAX_SHEET_COLUMNS,
    MAX_SHEET_ROWS,
};

#[cfg(test)]
pub(crate) use payload::test_support;
