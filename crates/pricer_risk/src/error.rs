//! Risk error types.
//!
//! This module provides structured error types for risk operations
//! using `thiserror` for derivation.

use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use thiserror::Error;

/// Errors that can occur during risk calculations.
///
/// Every variant except `NumericalInstability` is a caller-contract
/// violation detected before any computation starts. No partial results are
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Benchmark (SPY) price is non-positive or non-finite.
    #[error("Invalid benchmark price: {0} (must be positive and finite)")]
    InvalidBenchmarkPrice(f64),

    /// Beta is non-finite.
    #[error("Invalid beta for {ticker}: {beta}")]
    InvalidBeta {
        /// Ticker of the offending leg
        ticker: String,
        /// The offending beta
        beta: f64,
    },

    /// Leg data is unusable (e.g. non-positive equity price).
    #[error("Invalid position {ticker}: {reason}")]
    InvalidPosition {
        /// Ticker of the offending leg
        ticker: String,
        /// What is wrong with it
        reason: String,
    },

    /// Scenario inputs violate the pricing contract.
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// A required position field was not supplied.
    #[error("Missing {field} for {ticker}")]
    MissingField {
        /// Ticker of the incomplete position
        ticker: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// No market quote exists for the ticker.
    #[error("Unknown ticker: {0}")]
    UnknownTicker(String),

    /// Greeks came out NaN or infinite (e.g. a spot smaller than the bump floor).
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Option specification failed validation.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::Instrument(inner) => inner.into(),
            RiskError::NumericalInstability(msg) => PricingError::NumericalInstability(msg),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
