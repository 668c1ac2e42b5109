//! Validated distribution request.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Parameters of one bell-curve computation.
///
/// Can only be built through [`DistributionRequest::new`], so a value of this
/// type always satisfies `count >= 1`, `std_dev > 0`, `total_quantity >= 0`
/// and finite `mean`/`std_dev`/`total_quantity`. The mean may sit anywhere,
/// including outside `[1, count]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionRequest {
    count: u32,
    mean: f64,
    std_dev: f64,
    total_quantity: f64,
}

impl DistributionRequest {
    /// Creates a request, rejecting parameters the engine cannot evaluate.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` (an invalid-parameter condition) if:
    /// - `count` is zero
    /// - `mean`, `std_dev` or `total_quantity` is NaN or infinite
    /// - `std_dev` is zero or negative
    /// - `total_quantity` is negative
    pub fn new(
        count: u32,
        mean: f64,
        std_dev: f64,
        total_quantity: f64,
    ) -> Result<Self, ValidationError> {
        if count < 1 {
            return Err(ValidationError::below_minimum("count", 1, i64::from(count)));
        }
        if !mean.is_finite() {
            return Err(ValidationError::not_finite("mean"));
        }
        if !std_dev.is_finite() {
            return Err(ValidationError::not_finite("std_dev"));
        }
        if std_dev <= 0.0 {
            return Err(ValidationError::not_positive("std_dev", std_dev));
        }
        if !total_quantity.is_finite() {
            return Err(ValidationError::not_finite("total_quantity"));
        }
        if total_quantity < 0.0 {
            return Err(ValidationError::negative("total_quantity", total_quantity));
        }

        Ok(Self {
            count,
            mean,
            std_dev,
            total_quantity,
        })
    }

    /// Number of points, indexed `1..=count`.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Center of the curve.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Width of the curve.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Quantity spread across the points.
    pub fn total_quantity(&self) -> f64 {
        self.total_quantity
    }
}
