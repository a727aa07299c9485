//! Instrument error types.
//!
//! This module provides structured error handling for option
//! specification validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// Raised when an option specification violates the caller contract of the
/// pricing function (positive spot and strike, finite inputs). Degenerate
/// expiry or volatility is not an error: those price at intrinsic value.
///
/// # Variants
/// - `InvalidSpot`: Underlying price is non-positive
/// - `InvalidStrike`: Strike price is non-positive
/// - `NonFinite`: A field is NaN or infinite
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid underlying price (non-positive).
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// A numeric field is NaN or infinite.
    #[error("Non-finite {field}: {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = InstrumentError::InvalidSpot { spot: 0.0 };
        assert_eq!(format!("{}", err), "Invalid spot: S = 0");
    }

    #[test]
    fn test_non_finite_display() {
        let err = InstrumentError::NonFinite {
            field: "volatility",
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite volatility: NaN");
    }

    #[test]
    fn test_instrument_error_to_pricing_error() {
        let err = InstrumentError::InvalidStrike { strike: -5.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("strike")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
