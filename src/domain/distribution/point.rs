//! Distribution points and the chart series derived from them.

use serde::Serialize;

/// One point of a computed distribution.
///
/// Holds unrounded values. Rounding happens in the presentation stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionPoint {
    index: u32,
    percentage: f64,
    allocated_quantity: f64,
}

impl DistributionPoint {
    pub(crate) fn new(index: u32, percentage: f64, allocated_quantity: f64) -> Self {
        Self {
            index,
            percentage,
            allocated_quantity,
        }
    }

    /// Position of the point, starting at 1.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Share of the whole curve, in percent (0-100).
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Portion of the total quantity assigned to this point.
    pub fn allocated_quantity(&self) -> f64 {
        self.allocated_quantity
    }
}

/// The `(index[], percentage[])` pair handed to a chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl ChartSeries {
    /// Builds the series from engine output.
    pub fn from_points(points: &[DistributionPoint]) -> Self {
        let (x, y) = points
            .iter()
            .map(|p| (f64::from(p.index()), p.percentage()))
            .unzip();
        Self { x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates `(x, y)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Largest y value, or `0.0` for an empty series.
    pub fn y_max(&self) -> f64 {
        self.y.iter().copied().fold(0.0, f64::max)
    }
}
