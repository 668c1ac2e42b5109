//! Export handlers.

mod export_distribution;

pub use export_distribution::{ExportDistributionCommand, ExportDistributionHandler, SavedExport};
