//! Export error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while encoding or writing a spreadsheet export.
///
/// An export either yields a complete buffer or one of these; there is no
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The chart renderer handed back zero bytes.
    #[error("Chart image is empty")]
    EmptyChartImage,

    /// The chart buffer is not a PNG the spreadsheet can embed.
    #[error("Chart image is unreadable: {0}")]
    UnreadableChartImage(String),

    /// The layout embeds a chart but the payload carries none.
    #[error("Layout requires a chart image but none was provided")]
    MissingChartImage,

    /// The annotation cannot be stored as plain cell text.
    #[error("Annotation cannot be stored in a cell: {0}")]
    InvalidAnnotation(String),

    /// The table does not fit in a worksheet.
    #[error("Export needs {required} columns, the sheet limit is {max}")]
    TooManyColumns { required: u32, max: u32 },

    /// The table does not fit in a worksheet.
    #[error("Export needs {required} rows, the sheet limit is {max}")]
    TooManyRows { required: u32, max: u32 },

    /// Unknown layout name.
    #[error("Unsupported export layout: {0}")]
    UnsupportedLayout(String),

    /// The spreadsheet library failed to produce a buffer.
    #[error("Spreadsheet writer failed: {0}")]
    Writer(String),
}

impl ExportError {
    /// Create an unreadable chart image error.
    pub fn unreadable_image(reason: impl Into<String>) -> Self {
        Self::UnreadableChartImage(reason.into())
    }

    /// Create an invalid annotation error.
    pub fn invalid_annotation(reason: impl Into<String>) -> Self {
        Self::InvalidAnnotation(reason.into())
    }

    /// Create a writer error.
    pub fn writer(reason: impl Into<String>) -> Self {
        Self::Writer(reason.into())
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::new(ErrorCode::ExportFailed, err.to_string())
    }
}
