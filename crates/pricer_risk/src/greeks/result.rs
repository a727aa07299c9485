//! Greeks result record.

/// Sensitivities of one option position.
///
/// `delta` and `gamma` are per share. `theta_per_day`, `vega_per_pct` and
/// `position_value` are dollar amounts for the whole position
/// (contracts × 100).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionGreeks {
    /// ∂V/∂S per share
    pub delta: f64,
    /// ∂²V/∂S² per share
    pub gamma: f64,
    /// Dollar change of the position over one calendar day (negative is decay)
    pub theta_per_day: f64,
    /// Dollar change of the position for a +1 vol point (0.01) move in σ
    pub vega_per_pct: f64,
    /// Theoretical price per share
    pub option_price: f64,
    /// option_price × multiplier
    pub position_value: f64,
}

impl PositionGreeks {
    /// Returns true when every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.delta,
            self.gamma,
            self.theta_per_day,
            self.vega_per_pct,
            self.option_price,
            self.position_value,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
