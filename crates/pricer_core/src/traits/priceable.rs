//! Trait for priceable instruments.
//!
//! Every pricing call in the workspace is a pure function of the
//! instrument's own fields. The `Priceable` trait captures that contract so
//! that the Greeks calculator can bump-and-revalue any instrument that can
//! produce a copy of itself with one input moved.

use num_traits::Float;

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// Static dispatch only. Implement it on value types or enums:
///
/// ```
/// use pricer_core::traits::Priceable;
///
/// enum Instrument {
///     Cash(f64),
///     Forward { spot: f64, strike: f64 },
/// }
///
/// impl Priceable<f64> for Instrument {
///     fn price(&self) -> f64 {
///         match self {
///             Instrument::Cash(amount) => *amount,
///             Instrument::Forward { spot, strike } => spot - strike,
///         }
///     }
/// }
///
/// assert_eq!(Instrument::Forward { spot: 105.0, strike: 100.0 }.price(), 5.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the price of the instrument.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - Degenerate inputs resolve to a finite value instead of panicking
    fn price(&self) -> T;
}
