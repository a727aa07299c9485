//! Analytical pricing formulas for European equity options.
//!
//! This module provides:
//! - Standard normal CDF
//! - Generalized Black-Scholes (Merton continuous-dividend) pricing
//!
//! ## Design Principles
//!
//! - **Total functions**: degenerate inputs price at intrinsic value
//! - **Numerical Stability**: Uses a symmetric erfc-based CDF so put-call
//!   parity holds to rounding

pub mod distributions;
pub mod generalized_black_scholes;

// Re-export main types at module level
pub use distributions::norm_cdf;
pub use generalized_black_scholes::{generalized_black_scholes, GeneralizedBlackScholes};
