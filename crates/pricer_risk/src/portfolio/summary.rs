//! Aggregation result records.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use pricer_models::instruments::OptionType;

/// Portfolio-level totals.
///
/// Delta and gamma are beta-weighted into benchmark-equivalent units;
/// theta and vega are raw dollar sums.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureTotals {
    /// Σ benchmark-equivalent shares
    pub beta_weighted_delta: f64,
    /// Σ benchmark-equivalent gamma
    pub beta_weighted_gamma: f64,
    /// Σ dollar theta per calendar day
    pub total_theta_per_day: f64,
    /// Σ dollar vega per vol point
    pub total_vega_per_pct: f64,
}

impl Add for ExposureTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            beta_weighted_delta: self.beta_weighted_delta + rhs.beta_weighted_delta,
            beta_weighted_gamma: self.beta_weighted_gamma + rhs.beta_weighted_gamma,
            total_theta_per_day: self.total_theta_per_day + rhs.total_theta_per_day,
            total_vega_per_pct: self.total_vega_per_pct + rhs.total_vega_per_pct,
        }
    }
}

impl AddAssign for ExposureTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ExposureTotals {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            beta_weighted_delta: self.beta_weighted_delta - rhs.beta_weighted_delta,
            beta_weighted_gamma: self.beta_weighted_gamma - rhs.beta_weighted_gamma,
            total_theta_per_day: self.total_theta_per_day - rhs.total_theta_per_day,
            total_vega_per_pct: self.total_vega_per_pct - rhs.total_vega_per_pct,
        }
    }
}

impl Sum for ExposureTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, x| acc + x)
    }
}

/// Leg kind tag in per-leg output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LegKind {
    /// Stock or ETF
    Equity,
    /// Option
    Option,
}

/// Per-leg exposure detail.
///
/// `delta` and `gamma` are per share; an equity leg reports delta 1 and
/// zero for everything else except `bw_delta`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegExposure {
    /// Underlying ticker
    pub ticker: String,
    /// Equity or option
    pub position_type: LegKind,
    /// Share count (equity legs)
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub shares: Option<f64>,
    /// Call or put (option legs)
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub option_type: Option<OptionType>,
    /// Strike (option legs)
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub strike: Option<f64>,
    /// Contract count (option legs)
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub contracts: Option<i64>,
    /// Per-share delta
    pub delta: f64,
    /// Per-share gamma
    pub gamma: f64,
    /// Dollar theta per day
    pub theta_per_day: f64,
    /// Dollar vega per vol point
    pub vega_per_pct: f64,
    /// Beta-weighted delta
    pub bw_delta: f64,
    /// Beta-weighted gamma
    pub bw_gamma: f64,
}

impl LegExposure {
    /// This leg's contribution to the portfolio totals.
    pub fn totals(&self) -> ExposureTotals {
        ExposureTotals {
            beta_weighted_delta: self.bw_delta,
            beta_weighted_gamma: self.bw_gamma,
            total_theta_per_day: self.theta_per_day,
            total_vega_per_pct: self.vega_per_pct,
        }
    }
}

/// Result of a portfolio aggregation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioSummary {
    /// Benchmark price used for beta-weighting
    pub spy_price_used: f64,
    /// Portfolio totals
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub totals: ExposureTotals,
    /// Per-leg detail in input order
    pub positions: Vec<LegExposure>,
}

impl PortfolioSummary {
    /// Number of legs aggregated.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True for an empty portfolio.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(d: f64, g: f64, t: f64, v: f64) -> ExposureTotals {
        ExposureTotals {
            beta_weighted_delta: d,
            beta_weighted_gamma: g,
            total_theta_per_day: t,
            total_vega_per_pct: v,
        }
    }

    #[test]
    fn test_add_and_sub_are_fieldwise() {
        let a = totals(1.0, 2.0, 3.0, 4.0);
        let b = totals(0.5, 0.25, -1.0, 2.0);
        assert_eq!(a + b, totals(1.5, 2.25, 2.0, 6.0));
        assert_eq!(a - b, totals(0.5, 1.75, 4.0, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let empty: Vec<ExposureTotals> = Vec::new();
        assert_eq!(empty.into_iter().sum::<ExposureTotals>(), ExposureTotals::default());
    }
}
