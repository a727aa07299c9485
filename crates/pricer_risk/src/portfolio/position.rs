//! Portfolio legs.

use pricer_models::instruments::OptionSpec;

use crate::error::RiskError;

/// Beta applied when neither the position nor the market supplies one.
pub const DEFAULT_BETA: f64 = 1.0;

/// Stock or ETF holding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityLeg {
    /// Underlying ticker
    pub ticker: String,
    /// Share count (negative for short)
    pub shares: f64,
    /// Current share price
    pub spot: f64,
    /// Beta to the benchmark
    pub beta: f64,
}

/// Option holding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionLeg {
    /// Underlying ticker
    pub ticker: String,
    /// Priced specification
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub spec: OptionSpec,
    /// Number of contracts (negative for short)
    pub contracts: i64,
    /// Beta of the underlying to the benchmark
    pub beta: f64,
}

/// One leg of a portfolio.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::PortfolioPosition;
///
/// let spy = PortfolioPosition::equity("SPY", 50.0, 600.0, 1.0);
/// assert_eq!(spy.ticker(), "SPY");
/// assert!(spy.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "position_type", rename_all = "lowercase")
)]
pub enum PortfolioPosition {
    /// Delta-one holding
    Equity(EquityLeg),
    /// Option holding
    Option(OptionLeg),
}

impl PortfolioPosition {
    /// Creates an equity leg.
    pub fn equity(ticker: impl Into<String>, shares: f64, spot: f64, beta: f64) -> Self {
        PortfolioPosition::Equity(EquityLeg {
            ticker: ticker.into(),
            shares,
            spot,
            beta,
        })
    }

    /// Creates an option leg.
    pub fn option(ticker: impl Into<String>, spec: OptionSpec, contracts: i64, beta: f64) -> Self {
        PortfolioPosition::Option(OptionLeg {
            ticker: ticker.into(),
            spec,
            contracts,
            beta,
        })
    }

    /// Underlying ticker.
    pub fn ticker(&self) -> &str {
        match self {
            PortfolioPosition::Equity(leg) => &leg.ticker,
            PortfolioPosition::Option(leg) => &leg.ticker,
        }
    }

    /// Beta to the benchmark.
    pub fn beta(&self) -> f64 {
        match self {
            PortfolioPosition::Equity(leg) => leg.beta,
            PortfolioPosition::Option(leg) => leg.beta,
        }
    }

    /// Underlying price.
    pub fn spot(&self) -> f64 {
        match self {
            PortfolioPosition::Equity(leg) => leg.spot,
            PortfolioPosition::Option(leg) => leg.spec.spot,
        }
    }

    /// Checks that the leg can be aggregated.
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidBeta` for a non-finite beta
    /// - `RiskError::InvalidPosition` for a bad equity price or share count
    /// - `RiskError::Instrument` for an invalid option specification
    pub fn validate(&self) -> Result<(), RiskError> {
        let beta = self.beta();
        if !beta.is_finite() {
            return Err(RiskError::InvalidBeta {
                ticker: self.ticker().to_string(),
                beta,
            });
        }

        match self {
            PortfolioPosition::Equity(leg) => {
                if !(leg.spot.is_finite() && leg.spot > 0.0) {
                    return Err(RiskError::InvalidPosition {
                        ticker: leg.ticker.clone(),
                        reason: format!("price must be positive, got {}", leg.spot),
                    });
                }
                if !leg.shares.is_finite() {
                    return Err(RiskError::InvalidPosition {
                        ticker: leg.ticker.clone(),
                        reason: format!("share count must be finite, got {}", leg.shares),
                    });
                }
                Ok(())
            }
            PortfolioPosition::Option(leg) => Ok(leg.spec.validate()?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::{InstrumentError, OptionType};

    fn spec() -> OptionSpec {
        OptionSpec::new(OptionType::Call, 132.0, 140.0, 0.1, 0.043, 0.0, 0.5)
    }

    #[test]
    fn test_accessors() {
        let leg = PortfolioPosition::option("NVDA", spec(), 2, 1.8);
        assert_eq!(leg.ticker(), "NVDA");
        assert_eq!(leg.beta(), 1.8);
        assert_eq!(leg.spot(), 132.0);
    }

    #[test]
    fn test_validate_rejects_non_finite_beta() {
        let leg = PortfolioPosition::equity("QQQ", 10.0, 520.0, f64::NAN);
        assert!(matches!(leg.validate(), Err(RiskError::InvalidBeta { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_equity_price() {
        let leg = PortfolioPosition::equity("IWM", 10.0, 0.0, 1.1);
        match leg.validate() {
            Err(RiskError::InvalidPosition { ticker, .. }) => assert_eq!(ticker, "IWM"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_forwards_instrument_errors() {
        let leg = PortfolioPosition::option("TSLA", spec().with_spot(-1.0), 1, 2.0);
        assert_eq!(
            leg.validate(),
            Err(RiskError::Instrument(InstrumentError::InvalidSpot { spot: -1.0 }))
        );
    }
}
