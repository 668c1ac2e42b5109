//! Display rounding policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tie-breaking rule applied when a value is rounded for display or export.
///
/// Rounding is a presentation concern only. Values that feed further
/// arithmetic are never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// `2.5 -> 3`, `-2.5 -> -3`.
    #[default]
    HalfAwayFromZero,
    /// `2.5 -> 2`, `3.5 -> 4` (banker's rounding).
    HalfToEven,
}

impl RoundingPolicy {
    /// Rounds `value` to `decimals` places using this policy.
    ///
    /// Scaling is done in binary floating point, so a decimal literal that
    /// sits just below a tie (e.g. `2.675`) rounds down.
    pub fn round_to(&self, value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let scaled = value * factor;
        let rounded = match self {
            RoundingPolicy::HalfAwayFromZero => scaled.round(),
            RoundingPolicy::HalfToEven => scaled.round_ties_even(),
        };
        rounded / factor
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingPolicy::HalfAwayFromZero => write!(f, "half_away_from_zero"),
            RoundingPolicy::HalfToEven => write!(f, "half_to_even"),
        }
    }
}
