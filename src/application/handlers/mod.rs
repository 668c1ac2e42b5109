//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod distribution;
pub mod export;

pub use distribution::{
    ComputeDistributionCommand, ComputeDistributionHandler, DistributionParams,
    RenderChartCommand, RenderChartHandler,
};
pub use export::{ExportDistributionCommand, ExportDistributionHandler, SavedExport};
