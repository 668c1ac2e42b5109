//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ComputeDistributionCommand, ComputeDistributionHandler, DistributionParams,
    ExportDistributionCommand, ExportDistributionHandler, RenderChartCommand, RenderChartHandler,
    SavedExport,
};
