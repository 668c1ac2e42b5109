//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, error types and numeric helpers
//! that form the vocabulary of the distribution domain.

mod errors;
mod rounding;
mod summation;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use rounding::RoundingPolicy;
pub use summation::compensated_sum;
