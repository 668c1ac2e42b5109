//! Compensated floating-point summation.

/// Sums `values` with Neumaier's compensated algorithm.
///
/// The error bound is independent of the number of terms, which keeps the
/// normalized series summing to 100 within a few ulps.
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(compensated_sum(std::iter::empty()), 0.0);
    }

    #[test]
    fn recovers_small_terms_lost_by_naive_summation() {
        let values = [1.0, 1e100, 1.0, -1e100];
        assert_eq!(compensated_sum(values), 2.0);
    }

    #[test]
    fn sums_many_tenths_exactly_enough() {
        let total = compensated_sum(std::iter::repeat(0.1).take(1000));
        assert!((total - 100.0).abs() < 1e-12);
    }
}
