//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChartRenderer` - Draws the bell curve as a PNG
//! - `SpreadsheetWriter` - Serializes a sheet plan into `.xlsx` bytes
//! - `ExportStorage` - Persists finished workbooks
//! - `Clock` - Supplies the export date

mod chart_renderer;
mod clock;
mod export_storage;
mod spreadsheet_writer;

pub use chart_renderer::{ChartError, ChartRenderer};
pub use clock::Clock;
pub use export_storage::{ExportStorage, StorageError};
pub use spreadsheet_writer::{ExportedWorkbook, SpreadsheetWriter};
