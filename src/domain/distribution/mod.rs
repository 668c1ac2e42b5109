//! Distribution Module - Bell-curve computation and its presentation.
//!
//! Two explicit stages:
//!
//! - **Compute** - [`DistributionEngine`] turns a [`DistributionRequest`] into
//!   unrounded [`DistributionPoint`]s.
//! - **Presentation** - [`PresentationStage`] rounds copies of those points
//!   for display and export; [`DistributionTable`] bundles both with totals.
//!
//! All functions are pure and stateless. Every call takes a full request.

mod engine;
mod point;
mod presentation;
mod request;

pub use engine::DistributionEngine;
pub use point::{ChartSeries, DistributionPoint};
pub use presentation::{
    DistributionTable, PresentationStage, PresentedPoint, PERCENTAGE_DECIMALS,
    QUANTITY_DECIMALS,
};
pub use request::DistributionRequest;
