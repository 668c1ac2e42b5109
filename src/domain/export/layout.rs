//! Export layouts and file naming.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ExportError;

/// MIME type of the produced workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Sheet names per layout.
pub const VERTICAL_SHEET_NAME: &str = "Distribución";
pub const HORIZONTAL_SHEET_NAME: &str = "Distribución Horizontal";

/// How the distribution table is laid out in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportLayout {
    /// One row per point: `X | Porcentaje (%) | Cajas estimadas`.
    Vertical,
    /// One column per point, with the chart and annotation below the table.
    #[default]
    Horizontal,
}

impl ExportLayout {
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ExportLayout::Vertical => VERTICAL_SHEET_NAME,
            ExportLayout::Horizontal => HORIZONTAL_SHEET_NAME,
        }
    }

    /// Whether the layout embeds a chart image (and so needs one rendered).
    pub fn embeds_chart(&self) -> bool {
        matches!(self, ExportLayout::Horizontal)
    }

    /// Whether the layout writes the annotation block.
    pub fn embeds_annotation(&self) -> bool {
        matches!(self, ExportLayout::Horizontal)
    }
}

impl std::fmt::Display for ExportLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportLayout::Vertical => write!(f, "vertical"),
            ExportLayout::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl std::str::FromStr for ExportLayout {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vertical" | "v" => Ok(ExportLayout::Vertical),
            "horizontal" | "h" => Ok(ExportLayout::Horizontal),
            _ => Err(ExportError::UnsupportedLayout(s.to_string())),
        }
    }
}

/// File name for an export generated on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("distribucion_gauss_{}.xlsx", date.format("%Y-%m-%d"))
}
