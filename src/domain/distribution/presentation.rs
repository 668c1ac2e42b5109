//! Presentation stage - Display rounding and the totals line.
//!
//! The compute stage hands over unrounded points. This stage produces the
//! rounded copies shown to the user and written to spreadsheets, and computes
//! totals from the unrounded series so rounding error never compounds.

use serde::Serialize;

use super::{DistributionPoint, DistributionRequest};
use crate::domain::foundation::{compensated_sum, RoundingPolicy};

/// Decimal places shown for percentages.
pub const PERCENTAGE_DECIMALS: u32 = 2;

/// Decimal places shown for allocated quantities.
pub const QUANTITY_DECIMALS: u32 = 0;

/// A distribution point rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresentedPoint {
    pub index: u32,
    pub percentage: f64,
    pub allocated_quantity: f64,
}

/// Applies a [`RoundingPolicy`] at the display/export boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentationStage {
    policy: RoundingPolicy,
}

impl PresentationStage {
    pub fn new(policy: RoundingPolicy) -> Self {
        Self { policy }
    }

    /// Rounds one point: percentage to 2 decimals, quantity to an integer.
    pub fn present_point(&self, point: &DistributionPoint) -> PresentedPoint {
        PresentedPoint {
            index: point.index(),
            percentage: self.policy.round_to(point.percentage(), PERCENTAGE_DECIMALS),
            allocated_quantity: self
                .policy
                .round_to(point.allocated_quantity(), QUANTITY_DECIMALS),
        }
    }

    pub fn present(&self, points: &[DistributionPoint]) -> Vec<PresentedPoint> {
        points.iter().map(|p| self.present_point(p)).collect()
    }
}

/// Everything the display path needs: raw points, rounded points and totals.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionTable {
    pub request: DistributionRequest,
    #[serde(skip)]
    pub points: Vec<DistributionPoint>,
    #[serde(rename = "points")]
    pub presented: Vec<PresentedPoint>,
    /// Sum of the unrounded percentages.
    pub total_percentage: f64,
    /// Sum of the unrounded allocations.
    pub total_allocated: f64,
}

impl DistributionTable {
    /// Builds the table from engine output.
    pub fn build(
        request: DistributionRequest,
        points: Vec<DistributionPoint>,
        stage: PresentationStage,
    ) -> Self {
        let presented = stage.present(&points);
        let total_percentage = compensated_sum(points.iter().map(|p| p.percentage()));
        let total_allocated = compensated_sum(points.iter().map(|p| p.allocated_quantity()));

        Self {
            request,
            points,
            presented,
            total_percentage,
            total_allocated,
        }
    }

    /// The totals line, e.g. `Suma total: 100.00%`.
    pub fn total_line(&self) -> String {
        format!("Suma total: {:.2}%", self.total_percentage)
    }

    /// Sum of the rounded quantities. May differ from the requested total by
    /// up to half a unit per point.
    pub fn presented_quantity_sum(&self) -> f64 {
        self.presented.iter().map(|p| p.allocated_quantity).sum()
    }
}
