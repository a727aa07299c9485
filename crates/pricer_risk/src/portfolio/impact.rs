//! What-if analysis for adding one position to a portfolio.

use std::iter;

use tracing::debug;

use super::aggregator::PortfolioAggregator;
use super::position::PortfolioPosition;
use super::summary::{ExposureTotals, LegExposure, PortfolioSummary};
use crate::error::RiskError;

/// Portfolio exposure before and after adding a position.
///
/// All three aggregations share one benchmark price. `change` is
/// `after.totals - before.totals`, never an incrementally patched total.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HypotheticalImpact {
    /// Benchmark price used for beta-weighting
    pub spy_price_used: f64,
    /// The new position aggregated on its own
    pub new_position: LegExposure,
    /// Existing portfolio
    pub before: PortfolioSummary,
    /// Existing portfolio plus the new position
    pub after: PortfolioSummary,
    /// after - before
    pub change: ExposureTotals,
}

impl PortfolioAggregator {
    /// Aggregates `existing`, `[new]` and `existing ++ [new]`.
    ///
    /// # Errors
    ///
    /// Same as [`PortfolioAggregator::aggregate`]; any invalid leg, including
    /// the new one, aborts the whole analysis.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_risk::portfolio::{PortfolioAggregator, PortfolioPosition};
    ///
    /// let existing = vec![PortfolioPosition::equity("SPY", 50.0, 600.0, 1.0)];
    /// let new = PortfolioPosition::equity("QQQ", 10.0, 500.0, 1.2);
    ///
    /// let impact = PortfolioAggregator::default()
    ///     .hypothetical_impact(&existing, &new, 600.0)
    ///     .unwrap();
    /// assert!((impact.change.beta_weighted_delta - 10.0).abs() < 1e-9);
    /// ```
    pub fn hypothetical_impact(
        &self,
        existing: &[PortfolioPosition],
        new: &PortfolioPosition,
        spy_price: f64,
    ) -> Result<HypotheticalImpact, RiskError> {
        let before = self.aggregate(existing, spy_price)?;
        let mut isolated = self.aggregate(std::slice::from_ref(new), spy_price)?;

        let combined: Vec<PortfolioPosition> = existing
            .iter()
            .cloned()
            .chain(iter::once(new.clone()))
            .collect();
        let after = self.aggregate(&combined, spy_price)?;

        let change = after.totals - before.totals;
        debug!(
            ticker = new.ticker(),
            existing_legs = existing.len(),
            delta_change = change.beta_weighted_delta,
            gamma_change = change.beta_weighted_gamma,
            "computed hypothetical impact"
        );

        // One input leg always yields one exposure.
        let new_position = isolated.positions.swap_remove(0);

        Ok(HypotheticalImpact {
            spy_price_used: spy_price,
            new_position,
            before,
            after,
            change,
        })
    }
}

/// Hypothetical impact with default Greeks and parallel settings.
pub fn calculate_hypothetical_impact(
    existing: &[PortfolioPosition],
    new: &PortfolioPosition,
    spy_price: f64,
) -> Result<HypotheticalImpact, RiskError> {
    PortfolioAggregator::default().hypothetical_impact(existing, new, spy_price)
}
