//! Error types for the optionlab CLI.

use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use pricer_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Offending file
        path: String,
        /// Parser message
        message: String,
    },

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid Greeks perturbation override
    #[error("Greeks configuration error: {0}")]
    Greeks(#[from] pricer_risk::greeks::ConfigError),

    /// Pricing or risk calculation failed
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON serialisation failed
    #[error("Serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Create a parse error
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<RiskError> for CliError {
    fn from(err: RiskError) -> Self {
        Self::Pricing(err.into())
    }
}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        Self::Pricing(err.into())
    }
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
