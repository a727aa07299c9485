//! Fixed scenario axes.
//!
//! Provides the price-move axis of the scenario grid, the three implied
//! volatility regimes, and the moves at which the Taylor decomposition is
//! reported.

/// Relative underlying moves of the scenario grid, in ascending order.
pub const PRICE_MOVES: [f64; 7] = [-0.15, -0.10, -0.05, 0.0, 0.05, 0.10, 0.15];

/// Relative underlying moves at which the P&L decomposition is reported.
pub const DECOMPOSITION_MOVES: [f64; 3] = [-0.05, 0.0, 0.05];

/// Implied volatility regime applied to every grid row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IvRegime {
    /// σ × 0.70 (post-event crush)
    Crush,
    /// σ unchanged
    Unchanged,
    /// σ × 1.30
    Expansion,
}

impl IvRegime {
    /// All regimes in grid column order.
    pub const ALL: [IvRegime; 3] = [IvRegime::Crush, IvRegime::Unchanged, IvRegime::Expansion];

    /// Multiplier applied to the current volatility.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        match self {
            IvRegime::Crush => 0.70,
            IvRegime::Unchanged => 1.0,
            IvRegime::Expansion => 1.30,
        }
    }

    /// Volatility under this regime.
    #[inline]
    pub fn apply(&self, volatility: f64) -> f64 {
        volatility * self.multiplier()
    }

    /// Column name in serialised output.
    pub fn label(&self) -> &'static str {
        match self {
            IvRegime::Crush => "iv_crush",
            IvRegime::Unchanged => "iv_unchanged",
            IvRegime::Expansion => "iv_expansion",
        }
    }
}

/// Whole-percent representation of a relative move (-0.05 → -5).
#[inline]
pub fn move_to_pct(relative_move: f64) -> i32 {
    (relative_move * 100.0).round() as i32
}

/// Label of a decomposition move: `minus_5pct`, `flat_0pct`, `plus_5pct`.
pub fn decomposition_label(relative_move: f64) -> String {
    let pct = move_to_pct(relative_move);
    let direction = match pct {
        p if p > 0 => "plus",
        p if p < 0 => "minus",
        _ => "flat",
    };
    format!("{}_{}pct", direction, pct.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_moves_sorted_and_symmetric() {
        assert!(PRICE_MOVES.windows(2).all(|w| w[0] < w[1]));
        for (lo, hi) in PRICE_MOVES.iter().zip(PRICE_MOVES.iter().rev()) {
            assert_eq!(*lo, -*hi);
        }
    }

    #[test]
    fn test_regime_multipliers() {
        assert_eq!(IvRegime::Crush.apply(0.30), 0.30 * 0.70);
        assert_eq!(IvRegime::Unchanged.apply(0.30), 0.30);
        assert_eq!(IvRegime::Expansion.apply(0.30), 0.30 * 1.30);
    }

    #[test]
    fn test_move_to_pct() {
        let pcts: Vec<i32> = PRICE_MOVES.iter().map(|m| move_to_pct(*m)).collect();
        assert_eq!(pcts, vec![-15, -10, -5, 0, 5, 10, 15]);
    }

    #[test]
    fn test_decomposition_labels() {
        let labels: Vec<String> = DECOMPOSITION_MOVES
            .iter()
            .map(|m| decomposition_label(*m))
            .collect();
        assert_eq!(labels, vec!["minus_5pct", "flat_0pct", "plus_5pct"]);
    }
}
