//! Taylor-expansion P&L attribution.
//!
//! ΔV ≈ delta·ΔS + ½·gamma·ΔS² + theta·Δt + vega·Δσ, compared against a
//! full reprice. The residual measures the higher-order terms the
//! expansion leaves out.

use pricer_core::traits::Priceable;
use pricer_core::types::time::roll_forward;
use pricer_models::instruments::OptionPosition;

use crate::error::RiskError;
use crate::greeks::{GreeksCalculator, GreeksConfig};

/// Residual share of |total_exact| above which higher-order terms are material.
pub const HIGHER_ORDER_THRESHOLD: f64 = 0.10;

/// Lowest volatility used in the exact reprice.
pub const MIN_REPRICE_VOLATILITY: f64 = 0.001;

/// What changed since the position was opened.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnLScenario {
    /// Dollar change of the underlying
    pub price_move: f64,
    /// Absolute change of σ in decimal (-0.10 is ten vol points lower)
    pub iv_change_abs: f64,
    /// Calendar days elapsed
    pub days_elapsed: u32,
}

impl PnLScenario {
    /// Creates a scenario.
    pub fn new(price_move: f64, iv_change_abs: f64, days_elapsed: u32) -> Self {
        Self {
            price_move,
            iv_change_abs,
            days_elapsed,
        }
    }
}

/// Echo of the scenario in reporting units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnLInputs {
    /// Dollar change of the underlying
    pub price_move: f64,
    /// IV change in vol points (iv_change_abs × 100)
    pub iv_change_pct: f64,
    /// Calendar days elapsed
    pub days_elapsed: u32,
}

/// Dollar contribution of each Greek for the whole position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnLBreakdown {
    /// delta · ΔS · multiplier
    pub delta: f64,
    /// ½ · gamma · ΔS² · multiplier
    pub gamma: f64,
    /// theta_per_day · days
    pub theta: f64,
    /// vega_per_pct · Δσ in vol points
    pub vega: f64,
}

impl PnLBreakdown {
    /// Sum of the four terms.
    pub fn total(&self) -> f64 {
        self.delta + self.gamma + self.theta + self.vega
    }
}

/// Result of a P&L attribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnLDecomposition {
    /// Scenario inputs
    pub inputs: PnLInputs,
    /// Per-Greek terms
    pub breakdown: PnLBreakdown,
    /// Sum of the breakdown
    pub total_approx: f64,
    /// (P(S+ΔS, T-Δt, σ+Δσ) - entry_price) × multiplier
    pub total_exact: f64,
    /// total_exact - total_approx
    pub residual: f64,
}

impl PnLDecomposition {
    /// True when |residual| exceeds [`HIGHER_ORDER_THRESHOLD`] of |total_exact|.
    pub fn higher_order_material(&self) -> bool {
        self.residual.abs() > HIGHER_ORDER_THRESHOLD * self.total_exact.abs()
    }
}

/// Attributes a position's P&L under a scenario to its Greeks.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{OptionPosition, OptionSpec, OptionType};
/// use pricer_risk::pnl::{PnLDecomposer, PnLScenario};
///
/// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
/// let position = OptionPosition::at_theoretical_entry(spec, 1);
///
/// let result = PnLDecomposer::default()
///     .decompose(&position, &PnLScenario::new(1.0, 0.01, 1))
///     .unwrap();
/// assert!(!result.higher_order_material());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PnLDecomposer {
    calculator: GreeksCalculator,
}

impl PnLDecomposer {
    /// Creates a decomposer whose Greeks use the given perturbation scheme.
    pub fn new(config: GreeksConfig) -> Self {
        Self {
            calculator: GreeksCalculator::new(config),
        }
    }

    /// Decomposes the P&L of `position` under `scenario`.
    ///
    /// The exact reprice floors time at 1e-8 years and volatility at
    /// [`MIN_REPRICE_VOLATILITY`].
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidScenario` if an input is non-finite or the moved
    ///   spot is not positive
    /// - `RiskError::Instrument` if the option specification is invalid
    /// - `RiskError::NumericalInstability` if the Greeks are not finite
    pub fn decompose(
        &self,
        position: &OptionPosition,
        scenario: &PnLScenario,
    ) -> Result<PnLDecomposition, RiskError> {
        let spec = &position.spec;
        spec.validate()?;

        if !scenario.price_move.is_finite() || !scenario.iv_change_abs.is_finite() {
            return Err(RiskError::InvalidScenario(format!(
                "non-finite scenario: price_move={}, iv_change_abs={}",
                scenario.price_move, scenario.iv_change_abs
            )));
        }
        if !position.entry_price.is_finite() {
            return Err(RiskError::InvalidScenario(format!(
                "non-finite entry price: {}",
                position.entry_price
            )));
        }
        let new_spot = spec.spot + scenario.price_move;
        if new_spot <= 0.0 {
            return Err(RiskError::InvalidScenario(format!(
                "moved spot {} + {} is not positive",
                spec.spot, scenario.price_move
            )));
        }

        let mult = position.multiplier();
        let greeks = self.calculator.compute(spec, position.contracts);
        if !greeks.is_finite() {
            return Err(RiskError::NumericalInstability(format!(
                "non-finite Greeks at spot {} (delta {}, gamma {})",
                spec.spot, greeks.delta, greeks.gamma
            )));
        }
        let days = scenario.days_elapsed as f64;
        let d_s = scenario.price_move;

        let breakdown = PnLBreakdown {
            delta: greeks.delta * d_s * mult,
            gamma: 0.5 * greeks.gamma * d_s * d_s * mult,
            theta: greeks.theta_per_day * days,
            vega: greeks.vega_per_pct * (scenario.iv_change_abs * 100.0),
        };
        let total_approx = breakdown.total();

        let repriced = spec
            .with_spot(new_spot)
            .with_time_to_expiry(roll_forward(spec.time_to_expiry, days))
            .with_volatility((spec.volatility + scenario.iv_change_abs).max(MIN_REPRICE_VOLATILITY))
            .price();
        let total_exact = (repriced - position.entry_price) * mult;

        Ok(PnLDecomposition {
            inputs: PnLInputs {
                price_move: scenario.price_move,
                iv_change_pct: scenario.iv_change_abs * 100.0,
                days_elapsed: scenario.days_elapsed,
            },
            breakdown,
            total_approx,
            total_exact,
            residual: total_exact - total_approx,
        })
    }
}

/// P&L decomposition with the default perturbation scheme.
pub fn pnl_decomposition(
    position: &OptionPosition,
    scenario: &PnLScenario,
) -> Result<PnLDecomposition, RiskError> {
    PnLDecomposer::default().decompose(position, scenario)
}
