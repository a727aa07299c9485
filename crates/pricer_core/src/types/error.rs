//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: the umbrella error every layer can convert into

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Layer-specific errors
/// (instrument validation, portfolio aggregation) convert into this type
/// when a caller wants a single error surface.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters (caller-contract violation)
/// - `NumericalInstability`: Computation produced a non-finite result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidInput("spot must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: spot must be positive");

        let err = PricingError::NumericalInstability("NaN gamma".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: NaN gamma");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err: Box<dyn std::error::Error> =
            Box::new(PricingError::InvalidInput("strike".to_string()));
        assert!(err.to_string().contains("strike"));
    }
}
