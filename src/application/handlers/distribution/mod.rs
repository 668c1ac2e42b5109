//! Distribution handlers.

mod compute_distribution;
mod render_chart;

pub use compute_distribution::{
    ComputeDistributionCommand, ComputeDistributionHandler, DistributionParams,
};
pub use render_chart::{RenderChartCommand, RenderChartHandler};
