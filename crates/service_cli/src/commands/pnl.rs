//! P&L attribution command implementation

use std::path::Path;

use pricer_risk::{PnLDecomposer, PnLScenario};
use tracing::{info, warn};

use super::Context;
use crate::error::Result;
use crate::input::load_position;
use crate::output::render;

/// Run the pnl command.
///
/// `iv_change` is the absolute change in σ as a decimal (-0.05 is five vol
/// points lower).
pub fn run(
    ctx: &Context,
    position: &Path,
    price_move: f64,
    iv_change: f64,
    days_elapsed: u32,
) -> Result<String> {
    info!("Decomposing P&L for {}", position.display());

    let position = load_position(position)?;
    let scenario = PnLScenario::new(price_move, iv_change, days_elapsed);
    let result = PnLDecomposer::new(ctx.greeks.clone()).decompose(&position, &scenario)?;

    if result.higher_order_material() {
        warn!(
            residual = result.residual,
            exact = result.total_exact,
            "Greek approximation misses a material share of the P&L"
        );
    }
    render(&result, ctx.format)
}
