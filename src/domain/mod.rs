//! Domain layer containing the distribution math and export layout.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, rounding, summation)
//! - `distribution` - Bell-curve computation and presentation rounding
//! - `export` - Spreadsheet layout of a computed distribution

pub mod distribution;
pub mod export;
pub mod foundation;
