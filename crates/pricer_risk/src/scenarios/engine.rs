//! Scenario execution engine.
//!
//! Reprices one option position over the price-move × IV-regime grid and
//! attributes the IV-unchanged P&L at three moves to its Greeks.

use pricer_core::traits::Priceable;
use pricer_core::types::time::roll_forward;
use pricer_models::instruments::OptionPosition;

use super::regimes::{decomposition_label, move_to_pct, IvRegime, DECOMPOSITION_MOVES, PRICE_MOVES};
use crate::greeks::{GreeksCalculator, GreeksConfig, PositionGreeks};

/// P&L of the whole position in each IV regime for one price move.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioRow {
    /// Underlying move in whole percent
    pub price_move_pct: i32,
    /// P&L with σ × 0.70
    pub iv_crush: f64,
    /// P&L with σ unchanged
    pub iv_unchanged: f64,
    /// P&L with σ × 1.30
    pub iv_expansion: f64,
}

impl ScenarioRow {
    /// P&L in the given regime.
    pub fn cell(&self, regime: IvRegime) -> f64 {
        match regime {
            IvRegime::Crush => self.iv_crush,
            IvRegime::Unchanged => self.iv_unchanged,
            IvRegime::Expansion => self.iv_expansion,
        }
    }
}

/// Greek attribution of the IV-unchanged P&L at one price move.
///
/// Volatility is held constant, so `vega` is always zero here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecompositionPoint {
    /// `minus_5pct`, `flat_0pct` or `plus_5pct`
    pub label: String,
    /// Underlying move in whole percent
    pub price_move_pct: i32,
    /// delta · ΔS · multiplier
    pub delta: f64,
    /// ½ · gamma · ΔS² · multiplier
    pub gamma: f64,
    /// theta_per_day · days_forward
    pub theta: f64,
    /// Always zero
    pub vega: f64,
    /// Sum of the four terms
    pub total_approx: f64,
    /// Full reprice P&L
    pub total_exact: f64,
    /// total_exact - total_approx
    pub residual: f64,
}

/// Complete result of a scenario run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioAnalysis {
    /// Greeks at the current market
    pub greeks: PositionGreeks,
    /// One row per entry of [`PRICE_MOVES`]
    pub scenario_grid: Vec<ScenarioRow>,
    /// One point per entry of [`DECOMPOSITION_MOVES`]
    pub pnl_decomposition: Vec<DecompositionPoint>,
    /// Calendar days the clock was rolled forward
    pub days_forward: u32,
}

impl ScenarioAnalysis {
    /// Looks up a decomposition point by label.
    pub fn decomposition(&self, label: &str) -> Option<&DecompositionPoint> {
        self.pnl_decomposition.iter().find(|p| p.label == label)
    }

    /// Worst grid cell as (price move %, regime, P&L).
    pub fn worst_cell(&self) -> Option<(i32, IvRegime, f64)> {
        self.scenario_grid
            .iter()
            .flat_map(|row| {
                IvRegime::ALL
                    .iter()
                    .map(move |regime| (row.price_move_pct, *regime, row.cell(*regime)))
            })
            .min_by(|a, b| a.2.total_cmp(&b.2))
    }
}

/// Engine for running the fixed scenario grid against option positions.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::{OptionPosition, OptionSpec, OptionType};
/// use pricer_risk::scenarios::ScenarioEngine;
///
/// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
/// let position = OptionPosition::at_theoretical_entry(spec, 1);
///
/// let analysis = ScenarioEngine::default().run(&position, 0);
/// assert_eq!(analysis.scenario_grid.len(), 7);
/// assert!(analysis.decomposition("flat_0pct").unwrap().total_exact.abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioEngine {
    calculator: GreeksCalculator,
}

impl ScenarioEngine {
    /// Creates an engine whose Greeks use the given perturbation scheme.
    pub fn new(config: GreeksConfig) -> Self {
        Self {
            calculator: GreeksCalculator::new(config),
        }
    }

    /// Runs the grid and decomposition `days_forward` calendar days ahead.
    ///
    /// Every cell is `(P(S·(1+m), T_fwd, σ_regime) - entry_price) × multiplier`
    /// with `T_fwd = max(T - days_forward/365, 1e-8)`.
    pub fn run(&self, position: &OptionPosition, days_forward: u32) -> ScenarioAnalysis {
        let spec = &position.spec;
        let mult = position.multiplier();
        let greeks = self.calculator.compute(spec, position.contracts);
        let forward = spec.with_time_to_expiry(roll_forward(spec.time_to_expiry, days_forward as f64));

        let scenario_grid = PRICE_MOVES
            .iter()
            .map(|&m| {
                let moved = forward.with_spot(spec.spot * (1.0 + m));
                let pnl = |regime: IvRegime| {
                    let price = moved.with_volatility(regime.apply(spec.volatility)).price();
                    (price - position.entry_price) * mult
                };
                ScenarioRow {
                    price_move_pct: move_to_pct(m),
                    iv_crush: pnl(IvRegime::Crush),
                    iv_unchanged: pnl(IvRegime::Unchanged),
                    iv_expansion: pnl(IvRegime::Expansion),
                }
            })
            .collect();

        let theta = greeks.theta_per_day * days_forward as f64;
        let pnl_decomposition = DECOMPOSITION_MOVES
            .iter()
            .map(|&m| {
                let d_s = spec.spot * m;
                let delta = greeks.delta * d_s * mult;
                let gamma = 0.5 * greeks.gamma * d_s * d_s * mult;
                let total_approx = delta + gamma + theta;
                let exact_price = forward.with_spot(spec.spot * (1.0 + m)).price();
                let total_exact = (exact_price - position.entry_price) * mult;
                DecompositionPoint {
                    label: decomposition_label(m),
                    price_move_pct: move_to_pct(m),
                    delta,
                    gamma,
                    theta,
                    vega: 0.0,
                    total_approx,
                    total_exact,
                    residual: total_exact - total_approx,
                }
            })
            .collect();

        ScenarioAnalysis {
            greeks,
            scenario_grid,
            pnl_decomposition,
            days_forward,
        }
    }
}

/// Scenario analysis with the default perturbation scheme.
pub fn run_scenario_analysis(position: &OptionPosition, days_forward: u32) -> ScenarioAnalysis {
    ScenarioEngine::default().run(position, days_forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{OptionSpec, OptionType};

    fn position(option_type: OptionType, contracts: i64) -> OptionPosition {
        let spec = OptionSpec::new(option_type, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
        OptionPosition::at_theoretical_entry(spec, contracts)
    }

    #[test]
    fn test_grid_shape_and_order() {
        let analysis = run_scenario_analysis(&position(OptionType::Call, 1), 5);
        let moves: Vec<i32> = analysis.scenario_grid.iter().map(|r| r.price_move_pct).collect();
        assert_eq!(moves, vec![-15, -10, -5, 0, 5, 10, 15]);
        assert_eq!(analysis.days_forward, 5);
        assert_eq!(analysis.pnl_decomposition.len(), 3);
    }

    #[test]
    fn test_long_call_grid_monotone_in_price() {
        let analysis = run_scenario_analysis(&position(OptionType::Call, 1), 0);
        for regime in IvRegime::ALL {
            let cells: Vec<f64> = analysis.scenario_grid.iter().map(|r| r.cell(regime)).collect();
            assert!(cells.windows(2).all(|w| w[0] < w[1]), "{:?}", regime);
        }
    }

    #[test]
    fn test_expansion_beats_crush_for_long_options() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let analysis = run_scenario_analysis(&position(option_type, 2), 3);
            for row in &analysis.scenario_grid {
                assert!(row.iv_expansion > row.iv_crush, "{:?}", row);
            }
        }
    }

    #[test]
    fn test_flat_unchanged_cell_is_pure_theta_at_entry() {
        let pos = position(OptionType::Call, 1);
        let analysis = run_scenario_analysis(&pos, 0);
        let flat = analysis.scenario_grid[3];
        assert_eq!(flat.price_move_pct, 0);
        assert!(flat.iv_unchanged.abs() < 1e-9);

        let later = run_scenario_analysis(&pos, 7);
        assert!(later.scenario_grid[3].iv_unchanged < 0.0);
    }

    #[test]
    fn test_decomposition_holds_vega_at_zero() {
        let analysis = run_scenario_analysis(&position(OptionType::Put, 3), 2);
        for point in &analysis.pnl_decomposition {
            assert_eq!(point.vega, 0.0);
            assert_relative_eq!(
                point.total_approx,
                point.delta + point.gamma + point.theta,
                epsilon = 1e-9
            );
            assert_relative_eq!(
                point.residual,
                point.total_exact - point.total_approx,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_decomposition_exact_matches_unchanged_grid_cells() {
        let analysis = run_scenario_analysis(&position(OptionType::Call, 1), 4);
        let minus = analysis.decomposition("minus_5pct").unwrap();
        let plus = analysis.decomposition("plus_5pct").unwrap();
        assert_relative_eq!(minus.total_exact, analysis.scenario_grid[2].iv_unchanged, epsilon = 1e-9);
        assert_relative_eq!(plus.total_exact, analysis.scenario_grid[4].iv_unchanged, epsilon = 1e-9);
        assert!(analysis.decomposition("plus_10pct").is_none());
    }

    #[test]
    fn test_days_forward_past_expiry_floors_time() {
        let analysis = run_scenario_analysis(&position(OptionType::Call, 1), 60);
        let up = analysis.scenario_grid[6];
        // Expired call at +15%: intrinsic 15 minus entry premium
        let entry = position(OptionType::Call, 1).entry_price;
        assert_relative_eq!(up.iv_unchanged, (15.0 - entry) * 100.0, epsilon = 1e-3);
        assert_relative_eq!(up.iv_crush, up.iv_expansion, epsilon = 1e-3);
    }

    #[test]
    fn test_worst_cell_for_long_call() {
        let analysis = run_scenario_analysis(&position(OptionType::Call, 1), 0);
        let (pct, regime, pnl) = analysis.worst_cell().unwrap();
        assert_eq!(pct, -15);
        assert_eq!(regime, IvRegime::Crush);
        assert!(pnl < 0.0);
    }
}
