//! CLI command implementations
//!
//! Each command loads its inputs, runs one `pricer_risk` operation and
//! returns the rendered output; `main` does the printing.

use pricer_core::types::PricingError;
use pricer_risk::greeks::GreeksConfig;
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::PositionGreeks;

use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::output::OutputFormat;

pub mod greeks;
pub mod impact;
pub mod pnl;
pub mod portfolio;
pub mod scenario;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub format: OutputFormat,
    /// Finite-difference scheme
    pub greeks: GreeksConfig,
    /// Portfolio fan-out
    pub parallel: ParallelConfig,
}

impl Context {
    /// Build from a validated configuration.
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        Ok(Self {
            format: config.format,
            greeks: config.greeks_config()?,
            parallel: config.parallel_config(),
        })
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            greeks: GreeksConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }
}

/// Rejects Greeks that came out NaN or infinite.
pub(crate) fn ensure_finite(greeks: &PositionGreeks) -> Result<()> {
    if greeks.is_finite() {
        Ok(())
    } else {
        Err(CliError::Pricing(PricingError::NumericalInstability(format!(
            "non-finite Greeks (delta {}, gamma {})",
            greeks.delta, greeks.gamma
        ))))
    }
}
