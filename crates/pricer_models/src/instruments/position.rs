//! Option positions: a specification held in some number of contracts.

use pricer_core::traits::Priceable;
use pricer_core::types::position_multiplier;

use super::option_spec::OptionSpec;

/// An option position with a known entry price.
///
/// Negative `contracts` model a short position. `entry_price` is per share.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionPosition, OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 0.1, 0.04, 0.0, 0.3);
/// let position = OptionPosition::at_theoretical_entry(spec, 2);
/// assert_eq!(position.multiplier(), 200.0);
/// assert_eq!(position.unrealized_pnl(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPosition {
    /// Priced specification
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub spec: OptionSpec,
    /// Number of contracts (negative for short)
    pub contracts: i64,
    /// Per-share price paid at entry
    pub entry_price: f64,
}

impl OptionPosition {
    /// Creates a position opened at `entry_price` per share.
    pub fn new(spec: OptionSpec, contracts: i64, entry_price: f64) -> Self {
        Self {
            spec,
            contracts,
            entry_price,
        }
    }

    /// Creates a position whose entry price is the current theoretical price.
    pub fn at_theoretical_entry(spec: OptionSpec, contracts: i64) -> Self {
        Self::new(spec, contracts, spec.price())
    }

    /// Dollar multiplier: contracts × 100.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        position_multiplier(self.contracts)
    }

    /// Current theoretical price per share.
    #[inline]
    pub fn theoretical_price(&self) -> f64 {
        self.spec.price()
    }

    /// Mark-to-model P&L of the whole position.
    pub fn unrealized_pnl(&self) -> f64 {
        (self.theoretical_price() - self.entry_price) * self.multiplier()
    }
}
