//! Equity option contract conventions.
//!
//! One listed equity option contract controls 100 shares. Every dollar
//! quantity reported for a whole position (theta, vega, position value,
//! scenario P&L) is scaled by the position multiplier
//! `contracts × CONTRACT_MULTIPLIER`; per-share quantities (price, delta,
//! gamma) are not.

/// Shares controlled by one option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Number of underlying shares a position of `contracts` controls.
///
/// Negative contract counts describe short positions and yield a
/// negative multiplier.
///
/// # Examples
/// ```
/// use pricer_core::types::contract::position_multiplier;
///
/// assert_eq!(position_multiplier(1), 100.0);
/// assert_eq!(position_multiplier(-2), -200.0);
/// ```
#[inline]
pub fn position_multiplier(contracts: i64) -> f64 {
    contracts as f64 * CONTRACT_MULTIPLIER
}
