//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Point count must be at least 1")]
    InvalidCount,

    #[error("Mean must be a finite number")]
    InvalidMean,

    #[error("Standard deviation must be a positive finite number")]
    InvalidStdDev,

    #[error("Total quantity must be a non-negative finite number")]
    InvalidTotalQuantity,

    #[error("Chart size must be between 1 and {max} pixels per side, got {width}x{height}")]
    InvalidChartSize { width: u32, height: u32, max: u32 },

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
