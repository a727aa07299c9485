//! Scenario command implementation

use std::path::Path;

use pricer_risk::ScenarioEngine;
use tracing::info;

use super::{ensure_finite, Context};
use crate::error::Result;
use crate::input::load_position;
use crate::output::render;

/// Run the scenario command
pub fn run(ctx: &Context, position: &Path, days_forward: u32) -> Result<String> {
    info!("Running scenario grid for {}", position.display());
    info!("  Days forward: {}", days_forward);

    let position = load_position(position)?;
    let analysis = ScenarioEngine::new(ctx.greeks.clone()).run(&position, days_forward);

    ensure_finite(&analysis.greeks)?;

    if let Some((move_pct, regime, pnl)) = analysis.worst_cell() {
        info!("Worst cell: {}% / {} = {:.2}", move_pct, regime.label(), pnl);
    }
    render(&analysis, ctx.format)
}
