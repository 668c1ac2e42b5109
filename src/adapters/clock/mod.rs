//! Clock adapters.

mod system_clock;

pub use system_clock::{FixedClock, SystemClock};
