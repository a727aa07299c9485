//! # Pricer Risk (L4: Application)
//!
//! Position and portfolio risk for European equity options.
//!
//! This crate provides:
//! - Finite-difference Greeks with a configurable perturbation scheme
//! - Scenario grids over price moves and implied volatility regimes
//! - Taylor-expansion P&L attribution with exact-reprice residuals
//! - Beta-weighted (SPY-normalised) portfolio aggregation
//! - Hypothetical "what-if" impact of adding a position
//! - Resolution of partially specified positions against a market snapshot
//! - Rayon-based parallelisation for large books
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  greeks/     - bump-and-reprice Greeks  │
//! │  scenarios/  - price × IV grid          │
//! │  pnl/        - Greek attribution        │
//! │  portfolio/  - aggregation, what-if     │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Generalized Black-Scholes pricing      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every function is pure: no caching, no I/O, no shared mutable state.
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{OptionSpec, OptionType};
//! use pricer_risk::portfolio::{aggregate_portfolio_greeks, PortfolioPosition};
//!
//! let call = OptionSpec::new(OptionType::Call, 132.0, 140.0, 30.0 / 365.0, 0.043, 0.0, 0.5);
//! let positions = vec![
//!     PortfolioPosition::equity("SPY", 50.0, 600.0, 1.0),
//!     PortfolioPosition::option("NVDA", call, 2, 1.8),
//! ];
//!
//! let summary = aggregate_portfolio_greeks(&positions, 600.0).unwrap();
//! assert_eq!(summary.positions.len(), 2);
//! assert!(summary.totals.beta_weighted_delta > 50.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod greeks;
pub mod parallel;
pub mod pnl;
pub mod portfolio;
pub mod scenarios;

// Re-export commonly used types
pub use error::RiskError;
pub use greeks::{calculate_greeks, GreeksCalculator, GreeksConfig, PositionGreeks};
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
pub use pnl::{pnl_decomposition, PnLDecomposer, PnLDecomposition, PnLScenario};
pub use portfolio::{
    aggregate_portfolio_greeks, calculate_hypothetical_impact, ExposureTotals,
    HypotheticalImpact, PortfolioAggregator, PortfolioPosition, PortfolioSummary,
};
pub use scenarios::{run_scenario_analysis, ScenarioAnalysis, ScenarioEngine};
