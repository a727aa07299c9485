//! Equity option instrument definitions.
//!
//! This module provides:
//! - [`OptionType`]: call or put
//! - [`OptionSpec`]: the inputs of one European option price
//! - [`OptionPosition`]: a specification held in a number of contracts
//! - [`InstrumentError`]: validation failures
//!
//! # Examples
//! ```
//! use pricer_models::instruments::{OptionPosition, OptionSpec, OptionType};
//!
//! let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 30.0 / 365.0, 0.043, 0.0, 0.30);
//! spec.validate().unwrap();
//!
//! let position = OptionPosition::new(spec, 1, 3.60);
//! assert_eq!(position.multiplier(), 100.0);
//! ```

pub mod error;
pub mod option_spec;
pub mod option_type;
pub mod position;

pub use error::InstrumentError;
pub use option_spec::OptionSpec;
pub use option_type::OptionType;
pub use position::OptionPosition;
