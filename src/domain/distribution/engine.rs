//! Distribution Engine - Discretized Gaussian weights normalized to 100%.

use tracing::debug;

use super::{DistributionPoint, DistributionRequest};
use crate::domain::foundation::compensated_sum;

/// Pure, stateless bell-curve calculator.
///
/// # Algorithm
///
/// For every index `i` in `1..=count`:
///
/// ```text
/// w_i          = exp(-0.5 * ((i - mean) / std_dev)^2)
/// percentage_i = w_i / sum(w) * 100
/// allocated_i  = percentage_i / 100 * total_quantity
/// ```
///
/// The `1/(σ√2π)` density constant is omitted since normalization cancels it.
/// Nothing is rounded here.
pub struct DistributionEngine;

impl DistributionEngine {
    /// Computes the ordered distribution for a validated request.
    ///
    /// Returns exactly `request.count()` points, index ascending. Same input,
    /// bit-identical output.
    pub fn compute(request: &DistributionRequest) -> Vec<DistributionPoint> {
        let weights = Self::weights(request);
        let total_weight = compensated_sum(weights.iter().copied());
        let total_quantity = request.total_quantity();

        weights
            .iter()
            .zip(1..=request.count())
            .map(|(weight, index)| {
                let percentage = weight / total_weight * 100.0;
                let allocated_quantity = percentage / 100.0 * total_quantity;
                DistributionPoint::new(index, percentage, allocated_quantity)
            })
            .collect()
    }

    /// Unnormalized bell-curve value at `x`.
    pub fn gaussian_weight(x: f64, mean: f64, std_dev: f64) -> f64 {
        let z = (x - mean) / std_dev;
        (-0.5 * z * z).exp()
    }

    /// Raw weights, falling back to rescaled weights when every raw weight
    /// underflows (mean far outside the index range relative to `std_dev`).
    fn weights(request: &DistributionRequest) -> Vec<f64> {
        let raw: Vec<f64> = (1..=request.count())
            .map(|i| Self::gaussian_weight(f64::from(i), request.mean(), request.std_dev()))
            .collect();

        if compensated_sum(raw.iter().copied()) >= f64::MIN_POSITIVE {
            return raw;
        }

        debug!(
            count = request.count(),
            mean = request.mean(),
            std_dev = request.std_dev(),
            "Gaussian weights underflowed, rescaling against the nearest index"
        );
        Self::rescaled_weights(request)
    }

    /// Weights divided by the largest weight, computed in log space.
    ///
    /// With `n` the index nearest the mean,
    /// `exp(-z_i²/2) / exp(-z_n²/2) = exp(-(i - n)(i + n - 2μ) / 2σ²)`.
    /// The index difference is taken before dividing by `σ`, so equidistant
    /// indices stay tied and every other exponent is non-negative. An
    /// overflowing exponent gives weight 0, never NaN.
    fn rescaled_weights(request: &DistributionRequest) -> Vec<f64> {
        let mean = request.mean();
        let std_dev = request.std_dev();
        let nearest = mean.round().clamp(1.0, f64::from(request.count()));

        (1..=request.count())
            .map(|i| {
                let x = f64::from(i);
                if x == nearest {
                    return 1.0;
                }
                let half_sum = 0.5 * (x - mean) + 0.5 * (nearest - mean);
                let exponent = (x - nearest) * half_sum / std_dev / std_dev;
                let weight = (-exponent).exp();
                if weight.is_finite() {
                    weight
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(count: u32, mean: f64, std_dev: f64, total: f64) -> Vec<DistributionPoint> {
        let request = DistributionRequest::new(count, mean, std_dev, total).unwrap();
        DistributionEngine::compute(&request)
    }

    fn percentages(points: &[DistributionPoint]) -> Vec<f64> {
        points.iter().map(|p| p.percentage()).collect()
    }

    // ───────────────────────────────────────────────────────────────
    // Shape
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn produces_one_point_per_index_in_order() {
        let points = compute(10, 5.0, 2.0, 1000.0);
        assert_eq!(points.len(), 10);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.index(), i as u32 + 1);
        }
    }

    #[test]
    fn single_point_takes_everything() {
        let points = compute(1, 1.0, 1.0, 250.0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].percentage(), 100.0);
        assert_eq!(points[0].allocated_quantity(), 250.0);
    }

    #[test]
    fn symmetric_around_integer_mean() {
        let points = compute(9, 5.0, 2.0, 0.0);
        let pct = percentages(&points);
        for offset in 1..4 {
            assert_eq!(pct[4 - offset], pct[4 + offset]);
        }
    }

    #[test]
    fn peak_sits_at_mean() {
        let points = compute(10, 5.0, 2.0, 1000.0);
        let peak = points
            .iter()
            .max_by(|a, b| a.percentage().total_cmp(&b.percentage()))
            .unwrap();
        assert_eq!(peak.index(), 5);
    }

    #[test]
    fn matches_reference_values() {
        // count=3, mean=2, std=1: weights e^-0.5, 1, e^-0.5
        let points = compute(3, 2.0, 1.0, 100.0);
        let edge = (-0.5f64).exp();
        let total = 1.0 + 2.0 * edge;
        assert!((points[0].percentage() - edge / total * 100.0).abs() < 1e-12);
        assert!((points[1].percentage() - 100.0 / total).abs() < 1e-12);
        assert!((points[1].allocated_quantity() - 100.0 / total).abs() < 1e-12);
    }

    // ───────────────────────────────────────────────────────────────
    // Invariants
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn percentages_sum_to_one_hundred() {
        let points = compute(52, 26.0, 8.0, 0.0);
        let sum = compensated_sum(points.iter().map(|p| p.percentage()));
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn allocations_sum_to_total_quantity() {
        let points = compute(52, 26.0, 8.0, 5_000_000.0);
        let sum = compensated_sum(points.iter().map(|p| p.allocated_quantity()));
        assert!((sum - 5_000_000.0).abs() / 5_000_000.0 < 1e-9);
    }

    #[test]
    fn zero_total_quantity_allocates_nothing() {
        let points = compute(10, 5.0, 2.0, 0.0);
        assert!(points.iter().all(|p| p.allocated_quantity() == 0.0));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = compute(37, 12.3, 4.7, 9876.0);
        let second = compute(37, 12.3, 4.7, 9876.0);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.percentage().to_bits(), b.percentage().to_bits());
            assert_eq!(a.allocated_quantity().to_bits(), b.allocated_quantity().to_bits());
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Mean outside the index range
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn mean_beyond_last_index_decreases_from_right_edge() {
        let points = compute(10, 30.0, 2.0, 100.0);
        let pct = percentages(&points);
        for pair in pct.windows(2) {
            assert!(pair[0] < pair[1], "expected increasing towards the mean: {pct:?}");
        }
        let sum = compensated_sum(pct.iter().copied());
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn underflowing_weights_are_rescaled() {
        // exp(-0.5 * 1000^2) underflows for every index.
        let points = compute(5, 1005.0, 1.0, 10.0);
        let pct = percentages(&points);
        assert!(pct.iter().all(|p| p.is_finite()));
        assert_eq!(pct[4], 100.0);
        let sum = compensated_sum(pct.iter().copied());
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn overflowing_distances_collapse_onto_edge() {
        let points = compute(4, -1e300, 1e-300, 8.0);
        let pct = percentages(&points);
        assert_eq!(pct, vec![100.0, 0.0, 0.0, 0.0]);
        assert_eq!(points[0].allocated_quantity(), 8.0);
    }

    #[test]
    fn huge_finite_means_stay_finite() {
        let cases: [(u32, f64, f64, usize); 4] = [
            (4, -1.5e308, 1.0, 0),
            (4, -1e300, 1e-8, 0),
            (10, 1.7e308, 1.0, 9),
            (3, 1e154, 1e-154, 2),
        ];
        for (count, mean, std_dev, edge) in cases {
            let points = compute(count, mean, std_dev, 10.0);
            let pct = percentages(&points);
            assert!(
                points
                    .iter()
                    .all(|p| p.percentage().is_finite() && p.allocated_quantity().is_finite()),
                "mean={mean}, std_dev={std_dev}: {pct:?}"
            );
            assert_eq!(pct[edge], 100.0, "mean={mean}, std_dev={std_dev}: {pct:?}");
            let sum = compensated_sum(pct.iter().copied());
            assert!((sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn tiny_std_dev_between_two_indices_splits_evenly() {
        // Raw weights underflow, the two indices either side of the mean tie.
        let points = compute(4, 2.5, 1e-200, 0.0);
        assert_eq!(percentages(&points), vec![0.0, 50.0, 50.0, 0.0]);
    }

    #[test]
    fn gaussian_weight_is_one_at_mean() {
        assert_eq!(DistributionEngine::gaussian_weight(7.0, 7.0, 3.0), 1.0);
        let one_sigma = DistributionEngine::gaussian_weight(10.0, 7.0, 3.0);
        assert!((one_sigma - (-0.5f64).exp()).abs() < 1e-15);
    }
}
