//! Scenario analysis for single option positions.
//!
//! - [`regimes`]: price-move axis, IV regimes, decomposition moves
//! - [`engine`]: grid and Greek-attribution runner

pub mod engine;
pub mod regimes;

pub use engine::{
    run_scenario_analysis, DecompositionPoint, ScenarioAnalysis, ScenarioEngine, ScenarioRow,
};
pub use regimes::{IvRegime, DECOMPOSITION_MOVES, PRICE_MOVES};
