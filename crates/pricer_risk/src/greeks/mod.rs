//! Finite-difference Greeks for single option positions.
//!
//! - [`GreeksConfig`]: perturbation scheme with a validating builder
//! - [`GreeksCalculator`]: bump-and-reprice engine
//! - [`PositionGreeks`]: result record

pub mod calculator;
pub mod config;
pub mod result;

pub use calculator::{calculate_greeks, GreeksCalculator};
pub use config::{ConfigError, GreeksConfig, GreeksConfigBuilder};
pub use result::PositionGreeks;
