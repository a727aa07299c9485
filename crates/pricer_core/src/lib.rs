//! # pricer_core: Foundation Layer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The `Priceable` trait implemented by instruments (`traits`)
//! - Contract multiplier conventions (`types::contract`)
//! - Act/365 time-to-expiry helpers (`types::time`)
//! - The umbrella error type `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Calendar dates for the time provider boundary
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pricer_core::types::contract::position_multiplier;
//! use pricer_core::types::time::time_to_expiry;
//!
//! let valuation = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let t = time_to_expiry(valuation, expiry);
//! assert!((t - 30.0 / 365.0).abs() < 1e-12);
//!
//! assert_eq!(position_multiplier(3), 300.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
