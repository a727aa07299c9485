//! Resolution of loosely specified positions against a market snapshot.
//!
//! Positions arrive with only what the holder knows (ticker, size, maybe a
//! strike and expiry). The snapshot supplies prices, betas and dividend
//! yields; this module combines the two into fully priced legs. Nothing
//! here fetches data.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pricer_core::types::time_to_expiry;
use pricer_models::instruments::{OptionSpec, OptionType};

use super::position::{PortfolioPosition, DEFAULT_BETA};
use crate::error::RiskError;

/// Market data for one underlying.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnderlyingQuote {
    /// Last price
    pub spot: f64,
    /// Beta to the benchmark
    #[cfg_attr(feature = "serde", serde(default))]
    pub beta: Option<f64>,
    /// Continuous dividend yield
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: Option<f64>,
}

/// Point-in-time market data handed in by a data provider.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::{MarketSnapshot, UnderlyingQuote};
///
/// let snapshot = MarketSnapshot::new(600.0, 0.043)
///     .with_quote("NVDA", UnderlyingQuote { spot: 132.0, beta: Some(1.8), dividend_yield: None });
/// assert_eq!(snapshot.quote("NVDA").unwrap().spot, 132.0);
/// assert!(snapshot.quote("AAPL").is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Benchmark (SPY) price
    pub spy_price: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Quotes keyed by ticker
    #[cfg_attr(feature = "serde", serde(default))]
    pub quotes: BTreeMap<String, UnderlyingQuote>,
}

impl MarketSnapshot {
    /// Creates a snapshot without quotes.
    pub fn new(spy_price: f64, risk_free_rate: f64) -> Self {
        Self {
            spy_price,
            risk_free_rate,
            quotes: BTreeMap::new(),
        }
    }

    /// Adds or replaces a quote.
    pub fn with_quote(mut self, ticker: impl Into<String>, quote: UnderlyingQuote) -> Self {
        self.quotes.insert(ticker.into(), quote);
        self
    }

    /// Looks up a quote.
    ///
    /// # Errors
    ///
    /// `RiskError::UnknownTicker` when the snapshot has no quote for `ticker`.
    pub fn quote(&self, ticker: &str) -> Result<&UnderlyingQuote, RiskError> {
        self.quotes
            .get(ticker)
            .ok_or_else(|| RiskError::UnknownTicker(ticker.to_string()))
    }
}

/// A position as its holder describes it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "position_type", rename_all = "lowercase")
)]
pub enum PositionInput {
    /// Stock or ETF holding
    Equity {
        /// Ticker
        ticker: String,
        /// Share count
        shares: f64,
        /// Beta override
        #[cfg_attr(feature = "serde", serde(default))]
        beta: Option<f64>,
    },
    /// Option holding
    Option {
        /// Underlying ticker
        ticker: String,
        /// Call or put
        option_type: OptionType,
        /// Strike price
        #[cfg_attr(feature = "serde", serde(default))]
        strike: Option<f64>,
        /// Expiry date
        #[cfg_attr(feature = "serde", serde(default))]
        expiry: Option<NaiveDate>,
        /// Implied volatility
        #[cfg_attr(feature = "serde", serde(default))]
        sigma: Option<f64>,
        /// Contract count
        contracts: i64,
        /// Beta override
        #[cfg_attr(feature = "serde", serde(default))]
        beta: Option<f64>,
    },
}

impl PositionInput {
    /// Ticker of the position.
    pub fn ticker(&self) -> &str {
        match self {
            PositionInput::Equity { ticker, .. } | PositionInput::Option { ticker, .. } => ticker,
        }
    }

    /// Builds a priced leg from the snapshot.
    ///
    /// Beta falls back to the quote's beta, then [`DEFAULT_BETA`]. A missing
    /// dividend yield is zero. Time to expiry is Act/365 from
    /// `valuation_date`, floored at 1e-8 years.
    ///
    /// # Errors
    ///
    /// - `RiskError::UnknownTicker` if the snapshot has no quote
    /// - `RiskError::MissingField` if an option lacks strike, expiry or sigma
    /// - any error from [`PortfolioPosition::validate`]
    pub fn resolve(
        &self,
        snapshot: &MarketSnapshot,
        valuation_date: NaiveDate,
    ) -> Result<PortfolioPosition, RiskError> {
        let quote = snapshot.quote(self.ticker())?;

        let position = match self {
            PositionInput::Equity {
                ticker,
                shares,
                beta,
            } => PortfolioPosition::equity(
                ticker.clone(),
                *shares,
                quote.spot,
                resolve_beta(*beta, quote),
            ),
            PositionInput::Option {
                ticker,
                option_type,
                strike,
                expiry,
                sigma,
                contracts,
                beta,
            } => {
                let strike = require(*strike, ticker, "strike")?;
                let expiry = require(*expiry, ticker, "expiry")?;
                let sigma = require(*sigma, ticker, "sigma")?;

                let spec = OptionSpec::new(
                    *option_type,
                    quote.spot,
                    strike,
                    time_to_expiry(valuation_date, expiry),
                    snapshot.risk_free_rate,
                    quote.dividend_yield.unwrap_or(0.0),
                    sigma,
                );
                PortfolioPosition::option(
                    ticker.clone(),
                    spec,
                    *contracts,
                    resolve_beta(*beta, quote),
                )
            }
        };

        position.validate()?;
        Ok(position)
    }
}

/// Resolves every input, stopping at the first failure.
pub fn resolve_positions(
    inputs: &[PositionInput],
    snapshot: &MarketSnapshot,
    valuation_date: NaiveDate,
) -> Result<Vec<PortfolioPosition>, RiskError> {
    inputs
        .iter()
        .map(|input| input.resolve(snapshot, valuation_date))
        .collect()
}

fn resolve_beta(explicit: Option<f64>, quote: &UnderlyingQuote) -> f64 {
    explicit.or(quote.beta).unwrap_or(DEFAULT_BETA)
}

fn require<T>(value: Option<T>, ticker: &str, field: &'static str) -> Result<T, RiskError> {
    value.ok_or_else(|| RiskError::MissingField {
        ticker: ticker.to_string(),
        field,
    })
}
