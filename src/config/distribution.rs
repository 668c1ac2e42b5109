//! Default distribution parameters

use serde::Deserialize;

use super::error::ValidationError;

/// Default distribution parameters used when the CLI does not override them.
///
/// `mean` and `std_dev` follow `count` unless set: the mean sits at
/// `count / 2` and the deviation at `count / 6` (at least 1), both with
/// integer division.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    #[serde(default = "default_count")]
    pub count: u32,

    pub mean: Option<f64>,

    pub std_dev: Option<f64>,

    #[serde(default)]
    pub total_quantity: f64,
}

impl DistributionConfig {
    /// Mean for a given point count.
    pub fn mean_for(&self, count: u32) -> f64 {
        self.mean.unwrap_or_else(|| default_mean(count))
    }

    /// Standard deviation for a given point count.
    pub fn std_dev_for(&self, count: u32) -> f64 {
        self.std_dev.unwrap_or_else(|| default_std_dev(count))
    }

    /// Validate distribution defaults
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.count == 0 {
            return Err(ValidationError::InvalidCount);
        }
        if self.mean.is_some_and(|m| !m.is_finite()) {
            return Err(ValidationError::InvalidMean);
        }
        if self.std_dev.is_some_and(|s| !s.is_finite() || s <= 0.0) {
            return Err(ValidationError::InvalidStdDev);
        }
        if !self.total_quantity.is_finite() || self.total_quantity < 0.0 {
            return Err(ValidationError::InvalidTotalQuantity);
        }
        Ok(())
    }
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
            mean: None,
            std_dev: None,
            total_quantity: 0.0,
        }
    }
}

fn default_count() -> u32 {
    52
}

/// `count / 2`, integer division.
pub fn default_mean(count: u32) -> f64 {
    f64::from(count / 2)
}

/// `max(count / 6, 1)`, integer division.
pub fn default_std_dev(count: u32) -> f64 {
    f64::from((count / 6).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_count() {
        let config = DistributionConfig::default();
        assert_eq!(config.count, 52);
        assert_eq!(config.mean_for(52), 26.0);
        assert_eq!(config.std_dev_for(52), 8.0);
        assert_eq!(config.mean_for(11), 5.0);
        assert_eq!(config.std_dev_for(5), 1.0);
    }

    #[test]
    fn explicit_values_win() {
        let config = DistributionConfig {
            mean: Some(3.5),
            std_dev: Some(0.5),
            ..DistributionConfig::default()
        };
        assert_eq!(config.mean_for(52), 3.5);
        assert_eq!(config.std_dev_for(52), 0.5);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let zero = DistributionConfig {
            count: 0,
            ..DistributionConfig::default()
        };
        assert_eq!(zero.validate(), Err(ValidationError::InvalidCount));

        let flat = DistributionConfig {
            std_dev: Some(0.0),
            ..DistributionConfig::default()
        };
        assert_eq!(flat.validate(), Err(ValidationError::InvalidStdDev));

        let negative = DistributionConfig {
            total_quantity: -1.0,
            ..DistributionConfig::default()
        };
        assert_eq!(negative.validate(), Err(ValidationError::InvalidTotalQuantity));

        let nan_mean = DistributionConfig {
            mean: Some(f64::NAN),
            ..DistributionConfig::default()
        };
        assert_eq!(nan_mean.validate(), Err(ValidationError::InvalidMean));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(DistributionConfig::default().validate().is_ok());
    }
}
