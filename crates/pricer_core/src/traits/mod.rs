//! Core traits for priceable instruments.
//!
//! All traits are designed for static dispatch; instruments are plain
//! value types or enums and callers never need `Box<dyn Trait>`.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod priceable;

pub use priceable::Priceable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_with_f64() {
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }

        assert_eq!(generic_sqrt(4.0_f64), 2.0);
    }

    #[test]
    fn test_float_trait_mathematical_functions() {
        fn generic_exp<T: Float>(x: T) -> T {
            x.exp()
        }

        assert_eq!(generic_exp(0.0_f64), 1.0);
        assert!((generic_exp(1.0_f64) - std::f64::consts::E).abs() < 1e-10);
    }
}
