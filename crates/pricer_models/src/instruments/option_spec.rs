//! European option specification.

use pricer_core::traits::Priceable;

use super::error::InstrumentError;
use super::option_type::OptionType;
use crate::analytical::generalized_black_scholes;

/// Full set of inputs needed to price one European equity option.
///
/// All fields are public: the record is an immutable value, and finite
/// difference bumps are expressed through the `with_*` helpers which return
/// a modified copy.
///
/// # Examples
/// ```
/// use pricer_core::traits::Priceable;
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(OptionType::Put, 100.0, 105.0, 0.25, 0.04, 0.0, 0.2);
/// assert!(spec.validate().is_ok());
///
/// let bumped = spec.with_spot(101.0);
/// assert!(bumped.price() < spec.price());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    /// Call or put
    pub option_type: OptionType,
    /// Underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
    /// Annualised volatility (σ)
    pub volatility: f64,
}

impl OptionSpec {
    /// Creates a new option specification.
    ///
    /// # Arguments
    /// * `option_type` - Call or put
    /// * `spot` - Underlying price
    /// * `strike` - Strike price
    /// * `time_to_expiry` - Years to expiry
    /// * `rate` - Risk-free rate
    /// * `dividend_yield` - Continuous dividend yield
    /// * `volatility` - Annualised volatility
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Self {
        Self {
            option_type,
            spot,
            strike,
            time_to_expiry,
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Checks the pricing contract: finite fields, positive spot and strike.
    ///
    /// Non-positive expiry or volatility is accepted; such options price at
    /// intrinsic value.
    ///
    /// # Errors
    /// - `InstrumentError::NonFinite` if any numeric field is NaN or infinite
    /// - `InstrumentError::InvalidSpot` if spot <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry", self.time_to_expiry),
            ("rate", self.rate),
            ("dividend_yield", self.dividend_yield),
            ("volatility", self.volatility),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InstrumentError::NonFinite { field, value });
            }
        }

        if self.spot <= 0.0 {
            return Err(InstrumentError::InvalidSpot { spot: self.spot });
        }
        if self.strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike {
                strike: self.strike,
            });
        }

        Ok(())
    }

    /// Cost of carry `b = r - q`.
    #[inline]
    pub fn cost_of_carry(&self) -> f64 {
        self.rate - self.dividend_yield
    }

    /// Intrinsic value per share at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Copy with a different spot.
    #[inline]
    pub fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }

    /// Copy with a different volatility.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self { volatility, ..*self }
    }

    /// Copy with a different time to expiry.
    #[inline]
    pub fn with_time_to_expiry(&self, time_to_expiry: f64) -> Self {
        Self {
            time_to_expiry,
            ..*self
        }
    }
}

impl Priceable<f64> for OptionSpec {
    fn price(&self) -> f64 {
        generalized_black_scholes(self)
    }
}
