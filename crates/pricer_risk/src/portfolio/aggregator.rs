//! Beta-weighted portfolio aggregation.
//!
//! ```text
//! equity: bw_delta = shares · S · β / SPY
//! option: bw_delta = Δ · S · β / SPY · mult
//!         bw_gamma = Γ · S² · β² / SPY² · mult
//! ```
//!
//! Theta and vega are summed unweighted.

use pricer_core::types::position_multiplier;
use tracing::debug;

use super::position::PortfolioPosition;
use super::summary::{ExposureTotals, LegExposure, LegKind, PortfolioSummary};
use crate::error::RiskError;
use crate::greeks::{GreeksCalculator, GreeksConfig};
use crate::parallel::{map_with_config, ParallelConfig};

/// Aggregates Greeks across equity and option legs into benchmark units.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::{PortfolioAggregator, PortfolioPosition};
///
/// let positions = vec![PortfolioPosition::equity("QQQ", 10.0, 500.0, 1.2)];
/// let summary = PortfolioAggregator::default().aggregate(&positions, 500.0).unwrap();
///
/// assert_eq!(summary.totals.beta_weighted_delta, 12.0);
/// assert_eq!(summary.totals.beta_weighted_gamma, 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PortfolioAggregator {
    calculator: GreeksCalculator,
    parallel: ParallelConfig,
}

impl PortfolioAggregator {
    /// Creates an aggregator.
    pub fn new(greeks: GreeksConfig, parallel: ParallelConfig) -> Self {
        Self {
            calculator: GreeksCalculator::new(greeks),
            parallel,
        }
    }

    /// Returns the parallel execution settings.
    pub fn parallel_config(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Aggregates `positions` against the benchmark price.
    ///
    /// Every leg is validated before any Greeks are computed. Per-leg work
    /// may run on Rayon; totals are always summed in input order.
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidBenchmarkPrice` if `spy_price` is not positive and finite
    /// - the first leg validation error, see [`PortfolioPosition::validate`]
    /// - `RiskError::NumericalInstability` if any leg's Greeks are not finite
    pub fn aggregate(
        &self,
        positions: &[PortfolioPosition],
        spy_price: f64,
    ) -> Result<PortfolioSummary, RiskError> {
        validate_benchmark(spy_price)?;
        for position in positions {
            position.validate()?;
        }

        let legs = map_with_config(positions, &self.parallel, |p| {
            self.leg_exposure(p, spy_price)
        })
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
        let totals: ExposureTotals = legs.iter().map(LegExposure::totals).sum();

        debug!(
            legs = legs.len(),
            spy_price,
            beta_weighted_delta = totals.beta_weighted_delta,
            beta_weighted_gamma = totals.beta_weighted_gamma,
            "aggregated portfolio greeks"
        );

        Ok(PortfolioSummary {
            spy_price_used: spy_price,
            totals,
            positions: legs,
        })
    }

    /// Exposure of a single, already validated leg.
    ///
    /// # Errors
    ///
    /// `RiskError::NumericalInstability` when the option Greeks are NaN or
    /// infinite, which happens for spots below the spot bump floor.
    pub fn leg_exposure(
        &self,
        position: &PortfolioPosition,
        spy_price: f64,
    ) -> Result<LegExposure, RiskError> {
        let exposure = match position {
            PortfolioPosition::Equity(leg) => LegExposure {
                ticker: leg.ticker.clone(),
                position_type: LegKind::Equity,
                shares: Some(leg.shares),
                option_type: None,
                strike: None,
                contracts: None,
                delta: 1.0,
                gamma: 0.0,
                theta_per_day: 0.0,
                vega_per_pct: 0.0,
                bw_delta: leg.shares * leg.spot * leg.beta / spy_price,
                bw_gamma: 0.0,
            },
            PortfolioPosition::Option(leg) => {
                let greeks = self.calculator.compute(&leg.spec, leg.contracts);
                if !greeks.is_finite() {
                    return Err(RiskError::NumericalInstability(format!(
                        "{}: non-finite Greeks (delta {}, gamma {}, theta {}, vega {})",
                        leg.ticker,
                        greeks.delta,
                        greeks.gamma,
                        greeks.theta_per_day,
                        greeks.vega_per_pct
                    )));
                }
                let mult = position_multiplier(leg.contracts);
                let spot = leg.spec.spot;
                let ratio = leg.beta / spy_price;
                LegExposure {
                    ticker: leg.ticker.clone(),
                    position_type: LegKind::Option,
                    shares: None,
                    option_type: Some(leg.spec.option_type),
                    strike: Some(leg.spec.strike),
                    contracts: Some(leg.contracts),
                    delta: greeks.delta,
                    gamma: greeks.gamma,
                    theta_per_day: greeks.theta_per_day,
                    vega_per_pct: greeks.vega_per_pct,
                    bw_delta: greeks.delta * spot * ratio * mult,
                    bw_gamma: greeks.gamma * spot * spot * ratio * ratio * mult,
                }
            }
        };
        Ok(exposure)
    }
}

/// Aggregation with default Greeks and parallel settings.
pub fn aggregate_portfolio_greeks(
    positions: &[PortfolioPosition],
    spy_price: f64,
) -> Result<PortfolioSummary, RiskError> {
    PortfolioAggregator::default().aggregate(positions, spy_price)
}

pub(crate) fn validate_benchmark(spy_price: f64) -> Result<(), RiskError> {
    if spy_price.is_finite() && spy_price > 0.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidBenchmarkPrice(spy_price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeks::calculate_greeks;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{OptionSpec, OptionType};

    fn call_leg(contracts: i64, beta: f64) -> PortfolioPosition {
        let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
        PortfolioPosition::option("XYZ", spec, contracts, beta)
    }

    #[test]
    fn test_equity_leg_example() {
        let summary =
            aggregate_portfolio_greeks(&[PortfolioPosition::equity("XYZ", 100.0, 50.0, 1.2)], 500.0)
                .unwrap();
        assert_eq!(summary.totals.beta_weighted_delta, 12.0);
        assert_eq!(summary.positions[0].bw_gamma, 0.0);
        assert_eq!(summary.totals.beta_weighted_gamma, 0.0);
        assert_eq!(summary.totals.total_theta_per_day, 0.0);
        assert_eq!(summary.totals.total_vega_per_pct, 0.0);

        let leg = &summary.positions[0];
        assert_eq!(leg.position_type, LegKind::Equity);
        assert_eq!(leg.delta, 1.0);
        assert_eq!(leg.shares, Some(100.0));
        assert_eq!(leg.strike, None);
    }

    #[test]
    fn test_option_leg_weighting() {
        let spy = 600.0;
        let summary = aggregate_portfolio_greeks(&[call_leg(2, 1.5)], spy).unwrap();
        let greeks = calculate_greeks(
            &OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30),
            2,
        );
        let leg = &summary.positions[0];

        assert_relative_eq!(leg.bw_delta, greeks.delta * 100.0 * 1.5 / spy * 200.0, epsilon = 1e-9);
        assert_relative_eq!(
            leg.bw_gamma,
            greeks.gamma * 100.0 * 100.0 * 1.5 * 1.5 / (spy * spy) * 200.0,
            epsilon = 1e-12
        );
        assert_eq!(leg.theta_per_day, greeks.theta_per_day);
        assert_eq!(summary.totals.total_vega_per_pct, greeks.vega_per_pct);
        assert_eq!(leg.option_type, Some(OptionType::Call));
        assert_eq!(leg.contracts, Some(2));
    }

    #[test]
    fn test_empty_portfolio_is_all_zero() {
        let summary = aggregate_portfolio_greeks(&[], 600.0).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.totals, ExposureTotals::default());
        assert_eq!(summary.spy_price_used, 600.0);
    }

    #[test]
    fn test_invalid_benchmark_fails_fast() {
        for spy in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = aggregate_portfolio_greeks(&[call_leg(1, 1.0)], spy);
            assert!(matches!(result, Err(RiskError::InvalidBenchmarkPrice(_))));
        }
    }

    #[test]
    fn test_invalid_leg_aborts_whole_aggregation() {
        let positions = vec![
            call_leg(1, 1.0),
            PortfolioPosition::equity("BAD", 10.0, -5.0, 1.0),
        ];
        assert!(matches!(
            aggregate_portfolio_greeks(&positions, 600.0),
            Err(RiskError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_sub_floor_spot_is_numerical_instability() {
        // dS = max(1% S, 0.01) exceeds S, so S - dS is negative.
        let spec = OptionSpec::new(OptionType::Call, 0.005, 0.01, 30.0 / 365.0, 0.043, 0.0, 0.8);
        assert!(spec.validate().is_ok());

        let positions = vec![
            PortfolioPosition::equity("SPY", 10.0, 600.0, 1.0),
            PortfolioPosition::option("PENNY", spec, 1, 1.0),
        ];
        match aggregate_portfolio_greeks(&positions, 600.0) {
            Err(RiskError::NumericalInstability(msg)) => assert!(msg.starts_with("PENNY")),
            other => panic!("expected numerical instability, got {other:?}"),
        }
    }

    #[test]
    fn test_sub_floor_spot_fails_on_parallel_path_too() {
        let spec = OptionSpec::new(OptionType::Put, 0.005, 0.01, 30.0 / 365.0, 0.043, 0.0, 0.8);
        let mut positions: Vec<PortfolioPosition> = (0..20).map(|_| call_leg(1, 1.0)).collect();
        positions.push(PortfolioPosition::option("PENNY", spec, 1, 1.0));

        let result = PortfolioAggregator::new(GreeksConfig::default(), ParallelConfig::new(2, 4))
            .aggregate(&positions, 600.0);
        assert!(matches!(result, Err(RiskError::NumericalInstability(_))));
    }

    #[test]
    fn test_parallel_path_matches_sequential_exactly() {
        let positions: Vec<PortfolioPosition> = (0..250)
            .map(|i| {
                if i % 3 == 0 {
                    PortfolioPosition::equity(format!("EQ{}", i), 10.0 + i as f64, 50.0 + i as f64, 1.1)
                } else {
                    let spec = OptionSpec::new(
                        if i % 2 == 0 { OptionType::Call } else { OptionType::Put },
                        80.0 + i as f64 * 0.3,
                        100.0,
                        0.05 + i as f64 * 0.001,
                        0.043,
                        0.01,
                        0.2 + (i % 7) as f64 * 0.03,
                    );
                    PortfolioPosition::option(format!("OP{}", i), spec, (i % 5) as i64 - 2, 1.3)
                }
            })
            .collect();

        let parallel = PortfolioAggregator::new(GreeksConfig::default(), ParallelConfig::new(8, 10))
            .aggregate(&positions, 600.0)
            .unwrap();
        let sequential =
            PortfolioAggregator::new(GreeksConfig::default(), ParallelConfig::sequential())
                .aggregate(&positions, 600.0)
                .unwrap();

        assert_eq!(parallel, sequential);
    }
}
