//! Beta-weighted portfolio aggregation.
//!
//! This module provides:
//! - [`PortfolioPosition`]: tagged equity or option leg
//! - [`PortfolioAggregator`]: SPY-normalised Greeks across legs
//! - [`HypotheticalImpact`]: before/after/change for one added position
//! - [`MarketSnapshot`] and [`PositionInput`]: resolution of partially
//!   specified positions into priced legs

pub mod aggregator;
pub mod impact;
pub mod input;
pub mod position;
pub mod summary;

pub use aggregator::{aggregate_portfolio_greeks, PortfolioAggregator};
pub use impact::{calculate_hypothetical_impact, HypotheticalImpact};
pub use input::{resolve_positions, MarketSnapshot, PositionInput, UnderlyingQuote};
pub use position::{EquityLeg, OptionLeg, PortfolioPosition, DEFAULT_BETA};
pub use summary::{ExposureTotals, LegExposure, LegKind, PortfolioSummary};
