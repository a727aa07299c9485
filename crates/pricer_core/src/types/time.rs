//! Time-to-expiry conventions.
//!
//! The pricing core is handed year fractions directly; this module is the
//! boundary where calendar dates supplied by a time provider are converted
//! into those year fractions. Everything uses calendar days over a 365-day
//! year (Act/365 Fixed), the convention used for both the expiry fraction and
//! the one-day theta step.

use chrono::NaiveDate;

/// Calendar days per year used by every year-fraction conversion.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Smallest time to expiry handed to the pricing function.
///
/// Expired or same-day options are floored here rather than passed as zero
/// or negative, which keeps the one-day theta step well defined.
pub const MIN_TIME_TO_EXPIRY: f64 = 1e-8;

/// Converts a number of calendar days into a year fraction.
///
/// # Examples
/// ```
/// use pricer_core::types::time::days_to_years;
///
/// assert_eq!(days_to_years(365.0), 1.0);
/// ```
#[inline]
pub fn days_to_years(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Act/365 year fraction between two dates.
///
/// Unlike [`time_to_expiry`], this does not floor the result: it is
/// negative when `end` precedes `start`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::time::year_fraction_act365;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// assert!((year_fraction_act365(start, end) - 182.0 / 365.0).abs() < 1e-12);
/// assert!(year_fraction_act365(end, start) < 0.0);
/// ```
pub fn year_fraction_act365(start: NaiveDate, end: NaiveDate) -> f64 {
    days_to_years((end - start).num_days() as f64)
}

/// Time to expiry in years as seen from `valuation`.
///
/// Computes `(expiry - valuation).days / 365`, floored at
/// [`MIN_TIME_TO_EXPIRY`] so expired contracts price at intrinsic value.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::time::{time_to_expiry, MIN_TIME_TO_EXPIRY};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let expiry = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// assert_eq!(time_to_expiry(today, expiry), MIN_TIME_TO_EXPIRY);
/// ```
pub fn time_to_expiry(valuation: NaiveDate, expiry: NaiveDate) -> f64 {
    year_fraction_act365(valuation, expiry).max(MIN_TIME_TO_EXPIRY)
}

/// Rolls a time to expiry forward by `days` calendar days, floored at
/// [`MIN_TIME_TO_EXPIRY`].
///
/// # Examples
/// ```
/// use pricer_core::types::time::roll_forward;
///
/// let t = roll_forward(30.0 / 365.0, 10.0);
/// assert!((t - 20.0 / 365.0).abs() < 1e-12);
/// ```
#[inline]
pub fn roll_forward(time_to_expiry: f64, days: f64) -> f64 {
    (time_to_expiry - days_to_years(days)).max(MIN_TIME_TO_EXPIRY)
}
