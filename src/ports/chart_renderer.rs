//! Chart Renderer Port - Bell-curve image interface.
//!
//! The application hands a [`ChartSeries`] to this port and gets PNG bytes
//! back. Adapters (like `PlottersChartRenderer`) own the plotting library.

use thiserror::Error;

use crate::domain::distribution::ChartSeries;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for drawing the distribution chart.
///
/// # Contract
///
/// Implementations must:
/// - Plot `series.x` against `series.y` as a line with a filled area to zero
/// - Return a complete PNG buffer or an error, never partial bytes
/// - Produce the same bytes for the same series and settings
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ChartRenderer = get_renderer();
/// let png = renderer.render(&ChartSeries::from_points(&points))?;
/// ```
pub trait ChartRenderer: Send + Sync {
    /// Render the series as a PNG image.
    ///
    /// # Errors
    ///
    /// Returns `ChartError` if the series is unusable or drawing fails.
    fn render(&self, series: &ChartSeries) -> Result<Vec<u8>, ChartError>;
}

/// Errors from chart rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Nothing to plot.
    #[error("Chart series is empty")]
    EmptySeries,

    /// `x` and `y` have different lengths.
    #[error("Chart series mismatch: {x_len} x values, {y_len} y values")]
    MismatchedSeries { x_len: usize, y_len: usize },

    /// The plotting backend failed.
    #[error("Chart drawing failed: {0}")]
    Drawing(String),

    /// The rendered image could not be read back.
    #[error("Chart I/O failed: {0}")]
    Io(String),
}

impl ChartError {
    /// Create a drawing error.
    pub fn drawing(reason: impl Into<String>) -> Self {
        Self::Drawing(reason.into())
    }

    /// Create an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

impl From<ChartError> for DomainError {
    fn from(err: ChartError) -> Self {
        DomainError::new(ErrorCode::ChartFailed, err.to_string())
    }
}
