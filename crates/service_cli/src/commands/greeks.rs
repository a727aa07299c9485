//! Greeks command implementation

use std::path::Path;

use pricer_risk::GreeksCalculator;
use tracing::info;

use super::{ensure_finite, Context};
use crate::error::Result;
use crate::input::load_position;
use crate::output::render;

/// Run the greeks command
pub fn run(ctx: &Context, position: &Path) -> Result<String> {
    info!("Computing Greeks for {}", position.display());

    let position = load_position(position)?;
    let greeks = GreeksCalculator::new(ctx.greeks.clone()).compute(&position.spec, position.contracts);

    ensure_finite(&greeks)?;

    info!(delta = greeks.delta, price = greeks.option_price, "Greeks complete");
    render(&greeks, ctx.format)
}
