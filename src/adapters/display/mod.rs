//! Console display adapters.

mod table_renderer;

pub use table_renderer::{render_distribution_table, DistributionRow};
