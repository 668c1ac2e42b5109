//! Clock Port - Calendar date of an export.

use chrono::NaiveDate;

/// Port for reading the current date.
///
/// Tests pin the date with a fixed implementation.
pub trait Clock: Send + Sync {
    /// Today's date in the local calendar.
    fn today(&self) -> NaiveDate;
}
