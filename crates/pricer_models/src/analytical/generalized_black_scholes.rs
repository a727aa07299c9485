//! Generalized Black-Scholes pricing for European equity options.
//!
//! Merton's continuous-dividend variant of Black-Scholes, written in terms
//! of the cost of carry `b = r - q`.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! When T ≤ 0 or σ ≤ 0 the formula is undefined and the option is worth
//! its intrinsic value.

use super::distributions::norm_cdf;
use crate::instruments::{OptionSpec, OptionType};

/// Generalized Black-Scholes model with a continuous dividend yield.
///
/// Holds the market side of the pricing problem; strike and expiry are
/// supplied per call, the same way the contract side varies across a book.
///
/// # Examples
/// ```
/// use pricer_models::analytical::GeneralizedBlackScholes;
///
/// let gbs = GeneralizedBlackScholes::new(100.0, 0.05, 0.02, 0.2);
/// let call = gbs.price_call(100.0, 1.0);
/// let put = gbs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = call - put - (100.0 * (-0.02_f64).exp() - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedBlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl GeneralizedBlackScholes {
    /// Creates a new model.
    ///
    /// No validation is performed: degenerate volatility prices at intrinsic
    /// value, and positivity of spot is a caller contract checked by
    /// [`OptionSpec::validate`].
    ///
    /// # Arguments
    /// * `spot` - Current spot price
    /// * `rate` - Risk-free interest rate (annualised, continuous)
    /// * `dividend_yield` - Continuous dividend yield (annualised)
    /// * `volatility` - Annualised volatility
    pub fn new(spot: f64, rate: f64, dividend_yield: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        }
    }

    /// Creates the model from the market fields of an option specification.
    pub fn from_spec(spec: &OptionSpec) -> Self {
        Self::new(spec.spot, spec.rate, spec.dividend_yield, spec.volatility)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Cost of carry `b = r - q`.
    #[inline]
    pub fn cost_of_carry(&self) -> f64 {
        self.rate - self.dividend_yield
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful for `expiry > 0` and `volatility > 0`; outside that
    /// domain the result is infinite or NaN.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.cost_of_carry() + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    #[inline]
    fn is_degenerate(&self, expiry: f64) -> bool {
        expiry <= 0.0 || self.volatility <= 0.0
    }

    /// Computes the European call price per share.
    ///
    /// C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::GeneralizedBlackScholes;
    ///
    /// let gbs = GeneralizedBlackScholes::new(110.0, 0.05, 0.0, 0.2);
    /// // Expired: intrinsic value
    /// assert_eq!(gbs.price_call(100.0, 0.0), 10.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return OptionType::Call.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let carry = ((self.cost_of_carry() - self.rate) * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        self.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put price per share.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return OptionType::Put.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let carry = ((self.cost_of_carry() - self.rate) * expiry).exp();
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * carry * norm_cdf(-d1)
    }

    /// Prices a call or put per share.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: f64, expiry: f64) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}

/// Theoretical per-share value of a European option.
///
/// Pure and total: T ≤ 0 or σ ≤ 0 returns intrinsic value rather than an
/// error.
///
/// # Examples
/// ```
/// use pricer_models::analytical::generalized_black_scholes;
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
/// let price = generalized_black_scholes(&spec);
/// assert!(price > 3.5 && price < 3.7);
/// ```
pub fn generalized_black_scholes(spec: &OptionSpec) -> f64 {
    GeneralizedBlackScholes::from_spec(spec).price(
        spec.option_type,
        spec.strike,
        spec.time_to_expiry,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const T_30D: f64 = 30.0 / 365.0;

    fn atm(option_type: OptionType) -> OptionSpec {
        OptionSpec::new(option_type, 100.0, 100.0, T_30D, 0.043, 0.0, 0.30)
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_carry() {
        // ATM with b=0: d1 = σ√T / 2
        let gbs = GeneralizedBlackScholes::new(100.0, 0.03, 0.03, 0.2);
        assert_relative_eq!(gbs.d1(100.0, 1.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(gbs.d2(100.0, 1.0), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_moneyness_sign() {
        let gbs = GeneralizedBlackScholes::new(100.0, 0.0, 0.0, 0.2);
        assert!(gbs.d1(80.0, 0.5) > 0.0);
        assert!(gbs.d1(120.0, 0.5) < 0.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_atm_30_day_reference_values() {
        assert_relative_eq!(generalized_black_scholes(&atm(OptionType::Call)), 3.6034, epsilon = 1e-3);
        assert_relative_eq!(generalized_black_scholes(&atm(OptionType::Put)), 3.2506, epsilon = 1e-3);
    }

    #[test]
    fn test_reduces_to_black_scholes_without_dividend() {
        // Standard reference: S=K=100, r=5%, σ=20%, T=1 → C ≈ 10.4506
        let gbs = GeneralizedBlackScholes::new(100.0, 0.05, 0.0, 0.2);
        assert_relative_eq!(gbs.price_call(100.0, 1.0), 10.4506, epsilon = 1e-3);
        assert_relative_eq!(gbs.price_put(100.0, 1.0), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_dividend_lowers_call_raises_put() {
        let no_div = GeneralizedBlackScholes::new(100.0, 0.05, 0.0, 0.2);
        let div = GeneralizedBlackScholes::new(100.0, 0.05, 0.03, 0.2);
        assert!(div.price_call(100.0, 1.0) < no_div.price_call(100.0, 1.0));
        assert!(div.price_put(100.0, 1.0) > no_div.price_put(100.0, 1.0));
    }

    #[test]
    fn test_zero_expiry_returns_intrinsic() {
        let gbs = GeneralizedBlackScholes::new(110.0, 0.05, 0.01, 0.2);
        assert_eq!(gbs.price_call(100.0, 0.0), 10.0);
        assert_eq!(gbs.price_put(100.0, 0.0), 0.0);
        assert_eq!(gbs.price_put(120.0, -0.5), 10.0);
    }

    #[test]
    fn test_zero_volatility_returns_intrinsic() {
        let gbs = GeneralizedBlackScholes::new(90.0, 0.05, 0.0, 0.0);
        assert_eq!(gbs.price_call(100.0, 1.0), 0.0);
        assert_eq!(gbs.price_put(100.0, 1.0), 10.0);

        let negative_vol = GeneralizedBlackScholes::new(90.0, 0.05, 0.0, -0.1);
        assert_eq!(negative_vol.price_put(100.0, 1.0), 10.0);
    }

    #[test]
    fn test_tiny_expiry_converges_to_intrinsic() {
        let gbs = GeneralizedBlackScholes::new(110.0, 0.043, 0.0, 0.3);
        assert_relative_eq!(gbs.price_call(100.0, 1e-8), 10.0, epsilon = 1e-4);
        assert!(gbs.price_put(100.0, 1e-8) < 1e-6);
    }

    #[test]
    fn test_tiny_volatility_converges_to_intrinsic_without_carry() {
        let gbs = GeneralizedBlackScholes::new(110.0, 0.0, 0.0, 1e-6);
        assert_relative_eq!(gbs.price_call(100.0, T_30D), 10.0, epsilon = 1e-6);
        assert!(gbs.price_put(100.0, T_30D).abs() < 1e-6);
    }

    #[test]
    fn test_deep_otm_call_is_negligible() {
        let gbs = GeneralizedBlackScholes::new(50.0, 0.05, 0.0, 0.2);
        assert!(gbs.price_call(150.0, 0.25) < 1e-10);
    }

    #[test]
    fn test_price_dispatches_on_option_type() {
        let gbs = GeneralizedBlackScholes::new(100.0, 0.05, 0.01, 0.25);
        assert_eq!(gbs.price(OptionType::Call, 95.0, 0.5), gbs.price_call(95.0, 0.5));
        assert_eq!(gbs.price(OptionType::Put, 95.0, 0.5), gbs.price_put(95.0, 0.5));
    }

    #[test]
    fn test_from_spec_copies_market_fields() {
        let spec = OptionSpec::new(OptionType::Put, 101.0, 99.0, 0.5, 0.04, 0.015, 0.22);
        let gbs = GeneralizedBlackScholes::from_spec(&spec);
        assert_eq!(gbs.spot(), 101.0);
        assert_eq!(gbs.rate(), 0.04);
        assert_eq!(gbs.dividend_yield(), 0.015);
        assert_eq!(gbs.volatility(), 0.22);
        assert_relative_eq!(gbs.cost_of_carry(), 0.025, epsilon = 1e-15);
    }

    // ==========================================================
    // Parity Properties
    // ==========================================================

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 20.0..500.0_f64,
            strike in 20.0..500.0_f64,
            expiry in 0.01..3.0_f64,
            rate in -0.01..0.10_f64,
            dividend_yield in 0.0..0.06_f64,
            volatility in 0.05..1.0_f64,
        ) {
            let gbs = GeneralizedBlackScholes::new(spot, rate, dividend_yield, volatility);
            let lhs = gbs.price_call(strike, expiry) - gbs.price_put(strike, expiry);
            let rhs = spot * (-dividend_yield * expiry).exp() - strike * (-rate * expiry).exp();
            prop_assert!((lhs - rhs).abs() < 1e-6, "parity gap {}", lhs - rhs);
        }

        #[test]
        fn prop_prices_bounded_below_by_zero(
            spot in 20.0..500.0_f64,
            strike in 20.0..500.0_f64,
            expiry in 0.0..3.0_f64,
            volatility in 0.0..1.0_f64,
        ) {
            let gbs = GeneralizedBlackScholes::new(spot, 0.04, 0.01, volatility);
            prop_assert!(gbs.price_call(strike, expiry) >= -1e-4);
            prop_assert!(gbs.price_put(strike, expiry) >= -1e-4);
        }
    }
}
