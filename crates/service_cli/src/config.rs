//! CLI configuration.
//!
//! Loaded from a TOML file, falling back to defaults when the file does not
//! exist. Environment variables override file values, and command-line
//! flags override both.

use std::path::Path;

use pricer_risk::greeks::{self, GreeksConfig};
use pricer_risk::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
use serde::Deserialize;

use crate::output::OutputFormat;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level CLI configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default tracing level when `RUST_LOG` is unset
    pub log_level: String,
    /// Output format
    pub format: OutputFormat,
    /// Finite-difference overrides
    pub greeks: GreeksSection,
    /// Portfolio fan-out settings
    pub parallel: ParallelSection,
    /// Override values that could not be applied
    #[serde(skip)]
    override_errors: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: OutputFormat::Json,
            greeks: GreeksSection::default(),
            parallel: ParallelSection::default(),
            override_errors: Vec::new(),
        }
    }
}

/// `[greeks]` section. Unset fields keep the library defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GreeksSection {
    /// Relative spot bump
    pub spot_bump_relative: Option<f64>,
    /// Absolute floor on the spot bump
    pub spot_bump_floor: Option<f64>,
    /// Absolute volatility bump
    pub vol_bump_absolute: Option<f64>,
    /// Theta step in calendar days
    pub time_bump_days: Option<f64>,
}

/// `[parallel]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParallelSection {
    /// Leg count at which aggregation goes parallel
    pub parallel_threshold: usize,
    /// Minimum legs per Rayon task
    pub batch_size: usize,
}

impl Default for ParallelSection {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration, using defaults when `path` does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `OPTIONLAB_LOG_LEVEL` and `OPTIONLAB_FORMAT`.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(
            std::env::var("OPTIONLAB_LOG_LEVEL").ok(),
            std::env::var("OPTIONLAB_FORMAT").ok(),
        )
    }

    /// Apply log level and format overrides. An unparsable format is kept
    /// for [`CliConfig::validate`] to report.
    pub fn with_overrides(mut self, log_level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_lowercase();
        }
        if let Some(format) = format {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(e) => self.override_errors.push(format!("OPTIONLAB_FORMAT: {e}")),
            }
        }
        self
    }

    /// Validate configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.override_errors.clone();

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join("|"),
                self.log_level
            ));
        }

        if let Err(e) = self.greeks_config() {
            errors.push(e.to_string());
        }

        if self.parallel.batch_size == 0 {
            errors.push("parallel.batch_size must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Build the Greeks configuration from the `[greeks]` overrides.
    pub fn greeks_config(&self) -> Result<GreeksConfig, greeks::ConfigError> {
        let mut builder = GreeksConfig::builder();
        if let Some(v) = self.greeks.spot_bump_relative {
            builder = builder.spot_bump_relative(v);
        }
        if let Some(v) = self.greeks.spot_bump_floor {
            builder = builder.spot_bump_floor(v);
        }
        if let Some(v) = self.greeks.vol_bump_absolute {
            builder = builder.vol_bump_absolute(v);
        }
        if let Some(v) = self.greeks.time_bump_days {
            builder = builder.time_bump_days(v);
        }
        builder.build()
    }

    /// Parallel aggregation settings.
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::new(self.parallel.batch_size, self.parallel.parallel_threshold)
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// File is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),
    /// One or more values out of range
    #[error("Validation errors: {}", .0.join(", "))]
    Validation(Vec<String>),
}
