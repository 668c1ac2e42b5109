//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional TOML
//! file and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `GAUSS_EXPORT` prefix and nested values are
//! separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use gauss_export::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exports go to {}", config.export.output_dir.display());
//! ```

mod distribution;
mod error;
mod export;
mod logging;

pub use distribution::{default_mean, default_std_dev, DistributionConfig};
pub use error::{ConfigError, ValidationError};
pub use export::{ExportConfig, MAX_CHART_SIDE};
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GAUSS_EXPORT";

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default distribution parameters
    #[serde(default)]
    pub distribution: DistributionConfig,

    /// Export destination, layout and chart settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Equivalent to [`AppConfig::load_from`] with no file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an optional file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the given file, if any (format from its extension)
    /// 3. Reads environment variables with `GAUSS_EXPORT` prefix, which
    ///    override file values
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GAUSS_EXPORT__DISTRIBUTION__COUNT=30` -> `distribution.count = 30`
    /// - `GAUSS_EXPORT__EXPORT__LAYOUT=vertical` -> `export.layout = vertical`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The file is missing or malformed
    /// - Values cannot be parsed into expected types
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.distribution.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
