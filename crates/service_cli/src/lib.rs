//! # optionlab CLI
//!
//! File-driven front end for the pricer layers: single-position Greeks,
//! scenario grids and P&L attribution, portfolio aggregation and
//! hypothetical-trade impact.
//!
//! As the **S**ervice layer it only loads TOML inputs, calls `pricer_risk`
//! and renders the results; all numerics live below it.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use config::{CliConfig, ConfigError};
pub use error::{CliError, Result};
pub use output::OutputFormat;
