//! Finite-difference perturbation scheme.
//!
//! Provides [`GreeksConfig`] for configuring the bump sizes used by the
//! bump-and-reprice Greeks, with a validating builder.

use pricer_core::types::time::days_to_years;
use thiserror::Error;

/// Default relative spot bump (1% of spot).
pub const DEFAULT_SPOT_BUMP_RELATIVE: f64 = 0.01;
/// Default floor on the absolute spot bump ($0.01).
pub const DEFAULT_SPOT_BUMP_FLOOR: f64 = 0.01;
/// Default absolute volatility bump (0.1 vol point).
pub const DEFAULT_VOL_BUMP_ABSOLUTE: f64 = 0.001;
/// Default theta step in calendar days.
pub const DEFAULT_TIME_BUMP_DAYS: f64 = 1.0;

/// Configuration for Greeks calculation.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `spot_bump_relative` | 0.01 (1%) | Relative bump for spot price |
/// | `spot_bump_floor` | 0.01 | Minimum absolute spot bump in dollars |
/// | `vol_bump_absolute` | 0.001 | Absolute bump for volatility |
/// | `time_bump_days` | 1.0 | Forward time step for theta (calendar days) |
///
/// # Examples
///
/// ```rust
/// use pricer_risk::greeks::GreeksConfig;
///
/// let config = GreeksConfig::default();
/// assert_eq!(config.compute_spot_bump(100.0), 1.0);
/// assert_eq!(config.compute_spot_bump(0.5), 0.01);
///
/// let custom = GreeksConfig::builder()
///     .spot_bump_relative(0.005)
///     .build()
///     .unwrap();
/// assert_eq!(custom.compute_spot_bump(100.0), 0.5);
/// ```
///
/// Fields are private, so every instance is either the default or has
/// passed [`GreeksConfig::validate`]:
///
/// ```compile_fail
/// use pricer_risk::greeks::GreeksConfig;
///
/// let config = GreeksConfig { vol_bump_absolute: 0.0, ..GreeksConfig::default() };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GreeksConfig {
    /// Relative bump for spot price. The absolute bump is
    /// `max(spot_bump_relative * spot, spot_bump_floor)`.
    spot_bump_relative: f64,

    /// Minimum absolute spot bump.
    spot_bump_floor: f64,

    /// Absolute bump for volatility, applied up and down.
    vol_bump_absolute: f64,

    /// Theta step in calendar days, applied forward only.
    time_bump_days: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: DEFAULT_SPOT_BUMP_RELATIVE,
            spot_bump_floor: DEFAULT_SPOT_BUMP_FLOOR,
            vol_bump_absolute: DEFAULT_VOL_BUMP_ABSOLUTE,
            time_bump_days: DEFAULT_TIME_BUMP_DAYS,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder for constructing a `GreeksConfig`.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Returns an error if any parameter is non-finite or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spot_bump_relative > 0.0 && self.spot_bump_relative <= 1.0) {
            return Err(ConfigError::InvalidSpotBump(format!(
                "spot_bump_relative must be in (0, 1], got {}",
                self.spot_bump_relative
            )));
        }
        if !(self.spot_bump_floor > 0.0 && self.spot_bump_floor.is_finite()) {
            return Err(ConfigError::InvalidSpotBump(format!(
                "spot_bump_floor must be positive, got {}",
                self.spot_bump_floor
            )));
        }
        if !(self.vol_bump_absolute > 0.0 && self.vol_bump_absolute <= 0.5) {
            return Err(ConfigError::InvalidVolBump(format!(
                "vol_bump_absolute must be in (0, 0.5], got {}",
                self.vol_bump_absolute
            )));
        }
        if !(self.time_bump_days > 0.0 && self.time_bump_days <= 365.0) {
            return Err(ConfigError::InvalidTimeBump(format!(
                "time_bump_days must be in (0, 365], got {}",
                self.time_bump_days
            )));
        }

        Ok(())
    }

    /// Relative spot bump.
    pub fn spot_bump_relative(&self) -> f64 {
        self.spot_bump_relative
    }

    /// Minimum absolute spot bump.
    pub fn spot_bump_floor(&self) -> f64 {
        self.spot_bump_floor
    }

    /// Absolute volatility bump.
    pub fn vol_bump_absolute(&self) -> f64 {
        self.vol_bump_absolute
    }

    /// Theta step in calendar days.
    pub fn time_bump_days(&self) -> f64 {
        self.time_bump_days
    }

    /// Computes the absolute spot bump for a given spot price.
    #[inline]
    pub fn compute_spot_bump(&self, spot: f64) -> f64 {
        (self.spot_bump_relative * spot).max(self.spot_bump_floor)
    }

    /// Theta step expressed in years.
    #[inline]
    pub fn time_bump_years(&self) -> f64 {
        days_to_years(self.time_bump_days)
    }
}

/// Builder for [`GreeksConfig`].
///
/// Unset fields keep their defaults.
#[derive(Debug, Default, Clone)]
pub struct GreeksConfigBuilder {
    spot_bump_relative: Option<f64>,
    spot_bump_floor: Option<f64>,
    vol_bump_absolute: Option<f64>,
    time_bump_days: Option<f64>,
}

impl GreeksConfigBuilder {
    /// Sets the relative spot bump (default: 0.01 = 1%).
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.spot_bump_relative = Some(bump);
        self
    }

    /// Sets the absolute spot bump floor (default: 0.01).
    pub fn spot_bump_floor(mut self, floor: f64) -> Self {
        self.spot_bump_floor = Some(floor);
        self
    }

    /// Sets the absolute volatility bump (default: 0.001).
    pub fn vol_bump_absolute(mut self, bump: f64) -> Self {
        self.vol_bump_absolute = Some(bump);
        self
    }

    /// Sets the theta step in days (default: 1).
    pub fn time_bump_days(mut self, days: f64) -> Self {
        self.time_bump_days = Some(days);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid.
    pub fn build(self) -> Result<GreeksConfig, ConfigError> {
        let config = GreeksConfig {
            spot_bump_relative: self
                .spot_bump_relative
                .unwrap_or(DEFAULT_SPOT_BUMP_RELATIVE),
            spot_bump_floor: self.spot_bump_floor.unwrap_or(DEFAULT_SPOT_BUMP_FLOOR),
            vol_bump_absolute: self.vol_bump_absolute.unwrap_or(DEFAULT_VOL_BUMP_ABSOLUTE),
            time_bump_days: self.time_bump_days.unwrap_or(DEFAULT_TIME_BUMP_DAYS),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Error type for [`GreeksConfig`] validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
    /// Invalid spot bump or floor.
    #[error("Invalid spot bump: {0}")]
    InvalidSpotBump(String),
    /// Invalid volatility bump.
    #[error("Invalid vol bump: {0}")]
    InvalidVolBump(String),
    /// Invalid time bump.
    #[error("Invalid time bump: {0}")]
    InvalidTimeBump(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_values() {
        let config = GreeksConfig::default();
        assert_eq!(config.spot_bump_relative, 0.01);
        assert_eq!(config.spot_bump_floor, 0.01);
        assert_eq!(config.vol_bump_absolute, 0.001);
        assert_eq!(config.time_bump_days, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_without_overrides_equals_default() {
        assert_eq!(GreeksConfig::builder().build().unwrap(), GreeksConfig::default());
    }

    #[test]
    fn test_spot_bump_floor_applies_to_cheap_underlyings() {
        let config = GreeksConfig::default();
        assert_relative_eq!(config.compute_spot_bump(250.0), 2.5, epsilon = 1e-12);
        assert_eq!(config.compute_spot_bump(0.8), 0.01);
    }

    #[test]
    fn test_time_bump_years() {
        assert_relative_eq!(
            GreeksConfig::default().time_bump_years(),
            1.0 / 365.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(matches!(
            GreeksConfig::builder().spot_bump_relative(0.0).build(),
            Err(ConfigError::InvalidSpotBump(_))
        ));
        assert!(matches!(
            GreeksConfig::builder().spot_bump_floor(-0.01).build(),
            Err(ConfigError::InvalidSpotBump(_))
        ));
        assert!(matches!(
            GreeksConfig::builder().vol_bump_absolute(f64::NAN).build(),
            Err(ConfigError::InvalidVolBump(_))
        ));
        assert!(matches!(
            GreeksConfig::builder().time_bump_days(0.0).build(),
            Err(ConfigError::InvalidTimeBump(_))
        ));
    }

    #[test]
    fn test_zero_vol_bump_cannot_be_built() {
        assert!(matches!(
            GreeksConfig::builder().vol_bump_absolute(0.0).build(),
            Err(ConfigError::InvalidVolBump(_))
        ));

        let config = GreeksConfig::builder()
            .vol_bump_absolute(0.002)
            .time_bump_days(2.0)
            .build()
            .unwrap();
        assert_eq!(config.vol_bump_absolute(), 0.002);
        assert_eq!(config.time_bump_days(), 2.0);
        assert_eq!(config.spot_bump_relative(), DEFAULT_SPOT_BUMP_RELATIVE);
        assert_eq!(config.spot_bump_floor(), DEFAULT_SPOT_BUMP_FLOOR);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidVolBump("too big".to_string());
        assert_eq!(format!("{}", err), "Invalid vol bump: too big");
    }
}
