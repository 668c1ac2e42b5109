//! Adapters - Implementations of port interfaces.
//!
//! - `chart` - Bell-curve PNG rendering (plotters)
//! - `spreadsheet` - `.xlsx` serialization (rust_xlsxwriter)
//! - `storage` - Filesystem persistence of exports
//! - `clock` - System and fixed clocks
//! - `display` - Console table output (tabled)

pub mod chart;
pub mod clock;
pub mod display;
pub mod spreadsheet;
pub mod storage;

pub use chart::PlottersChartRenderer;
pub use clock::{FixedClock, SystemClock};
pub use display::render_distribution_table;
pub use spreadsheet::XlsxSpreadsheetWriter;
pub use storage::LocalExportStorage;
