//! Hypothetical impact command implementation

use std::path::Path;

use pricer_risk::portfolio::{MarketSnapshot, PortfolioAggregator, PositionInput};
use tracing::info;

use super::Context;
use crate::error::Result;
use crate::input::{load_toml, valuation_date, PortfolioFile};
use crate::output::render;

/// Run the impact command
pub fn run(
    ctx: &Context,
    portfolio: &Path,
    market: &Path,
    new_position: &Path,
    date: Option<&str>,
) -> Result<String> {
    let date = valuation_date(date)?;
    info!("Hypothetical impact of {} on {}", new_position.display(), portfolio.display());

    let snapshot: MarketSnapshot = load_toml(market)?;
    let existing = load_toml::<PortfolioFile>(portfolio)?.resolve(&snapshot, date)?;
    let new = load_toml::<PositionInput>(new_position)?.resolve(&snapshot, date)?;

    let aggregator = PortfolioAggregator::new(ctx.greeks.clone(), ctx.parallel.clone());
    let impact = aggregator.hypothetical_impact(&existing, &new, snapshot.spy_price)?;

    info!(
        "Beta-weighted delta change: {:+.4}",
        impact.change.beta_weighted_delta
    );
    render(&impact, ctx.format)
}
