//! Core financial types.
//!
//! This module provides:
//! - `contract`: Contract multiplier conventions for equity options
//! - `time`: Act/365 year fractions and time-to-expiry flooring
//! - `error`: The umbrella `PricingError`
//!
//! # Re-exports
//!
//! - [`PricingError`] from `error`
//! - [`CONTRACT_MULTIPLIER`], [`position_multiplier`] from `contract`
//! - [`time_to_expiry`], [`DAYS_PER_YEAR`], [`MIN_TIME_TO_EXPIRY`] from `time`

pub mod contract;
pub mod error;
pub mod time;

pub use contract::{position_multiplier, CONTRACT_MULTIPLIER};
pub use error::PricingError;
pub use time::{time_to_expiry, DAYS_PER_YEAR, MIN_TIME_TO_EXPIRY};
