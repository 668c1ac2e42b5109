//! Sheet plan - The exact cell and image layout of one worksheet.
//!
//! The encoder produces a `SheetPlan`; a spreadsheet writer turns it into
//! bytes. Positions are zero-based `(row, col)`.

use super::ChartImage;

/// Column count of an `.xlsx` worksheet.
pub const MAX_SHEET_COLUMNS: u32 = 16_384;

/// Row count of an `.xlsx` worksheet.
pub const MAX_SHEET_ROWS: u32 = 1_048_576;

/// Display format of a numeric cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// `0`
    Integer,
    /// `0.00`
    TwoDecimals,
}

impl NumberFormat {
    /// Excel number format code.
    pub fn pattern(&self) -> &'static str {
        match self {
            NumberFormat::Integer => "0",
            NumberFormat::TwoDecimals => "0.00",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number { value: f64, format: NumberFormat },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub row: u32,
    pub col: u16,
    pub value: CellValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    pub row: u32,
    pub col: u16,
    pub image: ChartImage,
}

/// Ordered write instructions for one worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    name: String,
    cells: Vec<PlacedCell>,
    images: Vec<PlacedImage>,
}

impl SheetPlan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn write_text(&mut self, row: u32, col: u16, text: impl Into<String>) {
        self.cells.push(PlacedCell {
            row,
            col,
            value: CellValue::Text(text.into()),
        });
    }

    pub fn write_number(&mut self, row: u32, col: u16, value: f64, format: NumberFormat) {
        self.cells.push(PlacedCell {
            row,
            col,
            value: CellValue::Number { value, format },
        });
    }

    pub fn insert_image(&mut self, row: u32, col: u16, image: ChartImage) {
        self.images.push(PlacedImage { row, col, image });
    }

    /// Cells in write order.
    pub fn cells(&self) -> &[PlacedCell] {
        &self.cells
    }

    pub fn images(&self) -> &[PlacedImage] {
        &self.images
    }

    /// Value at a position. Later writes win.
    pub fn cell(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cells
            .iter()
            .rev()
            .find(|c| c.row == row && c.col == col)
            .map(|c| &c.value)
    }

    pub fn text_at(&self, row: u32, col: u16) -> Option<&str> {
        match self.cell(row, col)? {
            CellValue::Text(text) => Some(text),
            CellValue::Number { .. } => None,
        }
    }

    pub fn number_at(&self, row: u32, col: u16) -> Option<f64> {
        match self.cell(row, col)? {
            CellValue::Number { value, .. } => Some(*value),
            CellValue::Text(_) => None,
        }
    }

    /// Highest row holding a cell, if any.
    pub fn last_row(&self) -> Option<u32> {
        self.cells.iter().map(|c| c.row).max()
    }
}
