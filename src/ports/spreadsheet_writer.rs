//! Spreadsheet Writer Port - Workbook serialization interface.
//!
//! The encoder decides where every cell and image goes; this port turns that
//! [`SheetPlan`] into `.xlsx` bytes. Adapters (like `XlsxSpreadsheetWriter`)
//! own the spreadsheet library.

use chrono::NaiveDate;

use crate::domain::export::{ExportError, ExportLayout, SheetPlan, XLSX_CONTENT_TYPE};

/// Port for producing workbook bytes.
///
/// # Contract
///
/// Implementations must:
/// - Write exactly the cells and images in the plan, one worksheet
/// - Apply each numeric cell's format
/// - Return the complete buffer or an error, never partial bytes
/// - Produce identical bytes for an identical plan and date
pub trait SpreadsheetWriter: Send + Sync {
    /// Serialize the plan into an `.xlsx` buffer.
    ///
    /// `generated_date` is stamped as the document creation date.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Writer` if the library fails.
    fn write(&self, plan: &SheetPlan, generated_date: NaiveDate) -> Result<Vec<u8>, ExportError>;
}

/// A finished workbook with its download metadata.
#[derive(Debug, Clone)]
pub struct ExportedWorkbook {
    /// The `.xlsx` bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename.
    pub filename: String,
    /// The layout that was used.
    pub layout: ExportLayout,
}

impl ExportedWorkbook {
    pub fn new(content: Vec<u8>, filename: impl Into<String>, layout: ExportLayout) -> Self {
        Self {
            content,
            content_type: XLSX_CONTENT_TYPE.to_string(),
            filename: filename.into(),
            layout,
        }
    }

    /// Size of the workbook in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_workbook_carries_xlsx_metadata() {
        let workbook = ExportedWorkbook::new(
            vec![1, 2, 3],
            "distribucion_gauss_2024-01-01.xlsx",
            ExportLayout::Vertical,
        );
        assert_eq!(
            workbook.content_type,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        assert_eq!(workbook.filename, "distribucion_gauss_2024-01-01.xlsx");
        assert_eq!(workbook.layout, ExportLayout::Vertical);
        assert_eq!(workbook.size(), 3);
    }

    #[test]
    fn spreadsheet_writer_is_object_safe() {
        fn _accepts(_: &dyn SpreadsheetWriter) {}
    }
}
