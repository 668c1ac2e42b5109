//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::export::ExportLayout;
use crate::domain::foundation::RoundingPolicy;

/// Largest accepted chart side, in pixels.
pub const MAX_CHART_SIDE: u32 = 10_000;

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory exported workbooks are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub layout: ExportLayout,

    /// Tie-break used when rounding displayed values
    #[serde(default)]
    pub rounding: RoundingPolicy,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,

    /// Draw title, axis labels and tick labels (needs a system font)
    #[serde(default = "default_chart_labels")]
    pub chart_labels: bool,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let in_range = |side: u32| (1..=MAX_CHART_SIDE).contains(&side);
        if !in_range(self.chart_width) || !in_range(self.chart_height) {
            return Err(ValidationError::InvalidChartSize {
                width: self.chart_width,
                height: self.chart_height,
                max: MAX_CHART_SIDE,
            });
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            layout: ExportLayout::default(),
            rounding: RoundingPolicy::default(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            chart_labels: default_chart_labels(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_chart_width() -> u32 {
    1000
}

fn default_chart_height() -> u32 {
    400
}

fn default_chart_labels() -> bool {
    true
}
