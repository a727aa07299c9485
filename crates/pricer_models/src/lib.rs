//! # Pricer Models (L2: Business Logic)
//!
//! Equity option instruments and the closed-form pricing function.
//!
//! This crate provides:
//! - Instrument definitions: [`instruments::OptionType`], [`instruments::OptionSpec`],
//!   [`instruments::OptionPosition`]
//! - Standard normal distribution functions
//! - Generalized Black-Scholes (Merton continuous-dividend) pricing
//!
//! ## Design Principles
//!
//! - **Value records**: instruments are immutable `Copy` types; every bump
//!   used for finite differences produces a new record
//! - **Total pricing**: degenerate inputs (T ≤ 0 or σ ≤ 0) price at
//!   intrinsic value instead of failing
//!
//! ## Example
//!
//! ```
//! use pricer_core::traits::Priceable;
//! use pricer_models::instruments::{OptionSpec, OptionType};
//!
//! let call = OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
//! let price = call.price();
//! assert!(price > 3.4 && price < 3.7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
