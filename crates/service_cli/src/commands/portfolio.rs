//! Portfolio command implementation

use std::path::Path;

use pricer_risk::portfolio::{MarketSnapshot, PortfolioAggregator};
use tracing::info;

use super::Context;
use crate::error::Result;
use crate::input::{load_toml, valuation_date, PortfolioFile};
use crate::output::render;

/// Run the portfolio command
pub fn run(ctx: &Context, portfolio: &Path, market: &Path, date: Option<&str>) -> Result<String> {
    let date = valuation_date(date)?;
    info!("Aggregating {} as of {}", portfolio.display(), date);

    let snapshot: MarketSnapshot = load_toml(market)?;
    let positions = load_toml::<PortfolioFile>(portfolio)?.resolve(&snapshot, date)?;

    let aggregator = PortfolioAggregator::new(ctx.greeks.clone(), ctx.parallel.clone());
    let summary = aggregator.aggregate(&positions, snapshot.spy_price)?;

    info!("Aggregated {} position(s)", summary.len());
    render(&summary, ctx.format)
}
