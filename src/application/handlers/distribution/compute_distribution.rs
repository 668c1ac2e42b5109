//! ComputeDistributionHandler - Query handler for the distribution table.

use tracing::debug;

use crate::domain::distribution::{
    DistributionEngine, DistributionRequest, DistributionTable, PresentationStage,
};
use crate::domain::foundation::{DomainError, RoundingPolicy};

/// Raw distribution parameters as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParams {
    pub count: u32,
    pub mean: f64,
    pub std_dev: f64,
    pub total_quantity: f64,
}

impl DistributionParams {
    /// Validates the parameters into a request.
    pub fn to_request(&self) -> Result<DistributionRequest, DomainError> {
        Ok(DistributionRequest::new(
            self.count,
            self.mean,
            self.std_dev,
            self.total_quantity,
        )?)
    }
}

/// Query for the rounded distribution table.
#[derive(Debug, Clone)]
pub struct ComputeDistributionCommand {
    pub params: DistributionParams,
    pub rounding: RoundingPolicy,
}

/// Handler for computing distributions.
///
/// Stateless: every call recomputes from the command.
#[derive(Debug, Clone, Default)]
pub struct ComputeDistributionHandler;

impl ComputeDistributionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ComputeDistributionCommand) -> Result<DistributionTable, DomainError> {
        let request = cmd.params.to_request()?;
        let points = DistributionEngine::compute(&request);
        let table = DistributionTable::build(request, points, PresentationStage::new(cmd.rounding));

        debug!(
            count = request.count(),
            mean = request.mean(),
            std_dev = request.std_dev(),
            total_percentage = table.total_percentage,
            "Computed distribution"
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn command(count: u32, mean: f64, std_dev: f64, total: f64) -> ComputeDistributionCommand {
        ComputeDistributionCommand {
            params: DistributionParams {
                count,
                mean,
                std_dev,
                total_quantity: total,
            },
            rounding: RoundingPolicy::default(),
        }
    }

    #[test]
    fn computes_table_for_valid_params() {
        let table = ComputeDistributionHandler::new()
            .handle(command(52, 26.0, 8.0, 1000.0))
            .unwrap();
        assert_eq!(table.presented.len(), 52);
        assert_eq!(table.total_line(), "Suma total: 100.00%");
        assert!((table.total_allocated - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_std_dev_is_invalid_parameter() {
        let err = ComputeDistributionHandler::new()
            .handle(command(10, 5.0, 0.0, 0.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert_eq!(err.details.get("field").map(String::as_str), Some("std_dev"));
    }

    #[test]
    fn zero_count_is_invalid_parameter() {
        let err = ComputeDistributionHandler::new()
            .handle(command(0, 5.0, 1.0, 0.0))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
        assert_eq!(err.details.get("field").map(String::as_str), Some("count"));
    }

    #[test]
    fn mean_outside_range_is_valid() {
        let table = ComputeDistributionHandler::new()
            .handle(command(10, 30.0, 2.0, 0.0))
            .unwrap();
        assert!((table.total_percentage - 100.0).abs() < 1e-9);
        assert_eq!(table.points.last().map(|p| p.index()), Some(10));
    }

    #[test]
    fn repeated_calls_give_identical_tables() {
        let handler = ComputeDistributionHandler::new();
        let a = handler.handle(command(30, 12.5, 3.3, 77.0)).unwrap();
        let b = handler.handle(command(30, 12.5, 3.3, 77.0)).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.presented, b.presented);
    }
}
