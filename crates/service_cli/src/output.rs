//! Result rendering.
//!
//! JSON goes through `serde_json`; tables are plain fixed-width text built
//! by the [`Table`] wrapper's `Display` impls.

use std::fmt;
use std::str::FromStr;

use pricer_risk::pnl::PnLDecomposition;
use pricer_risk::portfolio::{ExposureTotals, HypotheticalImpact, LegExposure, LegKind, PortfolioSummary};
use pricer_risk::scenarios::{IvRegime, ScenarioAnalysis};
use pricer_risk::PositionGreeks;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Fixed-width text table
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(format!("Unknown format: {other}. Supported: json, table")),
        }
    }
}

/// Renders `value` in the requested format.
pub fn render<'a, T>(value: &'a T, format: OutputFormat) -> Result<String>
where
    T: Serialize,
    Table<'a, T>: fmt::Display,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(Table(value).to_string()),
    }
}

/// Table view of a result.
pub struct Table<'a, T>(pub &'a T);

fn rule(f: &mut fmt::Formatter<'_>, width: usize) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(width))
}

fn write_totals(f: &mut fmt::Formatter<'_>, totals: &ExposureTotals) -> fmt::Result {
    writeln!(f, "{:<24}{:>14.4}", "Beta-weighted delta", totals.beta_weighted_delta)?;
    writeln!(f, "{:<24}{:>14.6}", "Beta-weighted gamma", totals.beta_weighted_gamma)?;
    writeln!(f, "{:<24}{:>14.2}", "Theta / day ($)", totals.total_theta_per_day)?;
    writeln!(f, "{:<24}{:>14.2}", "Vega / vol pt ($)", totals.total_vega_per_pct)
}

fn write_legs(f: &mut fmt::Formatter<'_>, legs: &[LegExposure]) -> fmt::Result {
    writeln!(
        f,
        "{:<8}{:<8}{:>10}{:>10}{:>10}{:>12}{:>12}{:>12}",
        "Ticker", "Type", "Detail", "Delta", "Gamma", "Theta/day", "BW delta", "BW gamma"
    )?;
    rule(f, 82)?;
    for leg in legs {
        let (kind, detail) = match leg.position_type {
            LegKind::Equity => ("equity", format!("{:.0} sh", leg.shares.unwrap_or_default())),
            LegKind::Option => (
                leg.option_type.map(|t| t.as_str()).unwrap_or("option"),
                format!(
                    "{}x{:.0}",
                    leg.contracts.unwrap_or_default(),
                    leg.strike.unwrap_or_default()
                ),
            ),
        };
        writeln!(
            f,
            "{:<8}{:<8}{:>10}{:>10.4}{:>10.4}{:>12.2}{:>12.2}{:>12.4}",
            leg.ticker, kind, detail, leg.delta, leg.gamma, leg.theta_per_day, leg.bw_delta, leg.bw_gamma
        )?;
    }
    Ok(())
}

impl fmt::Display for Table<'_, PositionGreeks> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.0;
        writeln!(f, "{:<20}{:>14.4}", "Option price", g.option_price)?;
        writeln!(f, "{:<20}{:>14.2}", "Position value ($)", g.position_value)?;
        writeln!(f, "{:<20}{:>14.4}", "Delta", g.delta)?;
        writeln!(f, "{:<20}{:>14.6}", "Gamma", g.gamma)?;
        writeln!(f, "{:<20}{:>14.2}", "Theta / day ($)", g.theta_per_day)?;
        writeln!(f, "{:<20}{:>14.2}", "Vega / vol pt ($)", g.vega_per_pct)
    }
}

impl fmt::Display for Table<'_, ScenarioAnalysis> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        write!(f, "{}", Table(&analysis.greeks))?;
        writeln!(f)?;
        writeln!(f, "Scenario P&L after {} day(s)", analysis.days_forward)?;
        write!(f, "{:>8}", "Move")?;
        for regime in IvRegime::ALL {
            write!(f, "{:>16}", regime.label())?;
        }
        writeln!(f)?;
        rule(f, 56)?;
        for row in &analysis.scenario_grid {
            write!(f, "{:>7}%", row.price_move_pct)?;
            for regime in IvRegime::ALL {
                write!(f, "{:>16.2}", row.cell(regime))?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:<12}{:>10}{:>10}{:>10}{:>12}{:>12}{:>10}",
            "Point", "Delta", "Gamma", "Theta", "Approx", "Exact", "Residual"
        )?;
        rule(f, 76)?;
        for p in &analysis.pnl_decomposition {
            writeln!(
                f,
                "{:<12}{:>10.2}{:>10.2}{:>10.2}{:>12.2}{:>12.2}{:>10.2}",
                p.label, p.delta, p.gamma, p.theta, p.total_approx, p.total_exact, p.residual
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Table<'_, PnLDecomposition> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.0;
        writeln!(
            f,
            "Move {:+.2}, IV {:+.2} pts, {} day(s)",
            d.inputs.price_move, d.inputs.iv_change_pct, d.inputs.days_elapsed
        )?;
        rule(f, 34)?;
        writeln!(f, "{:<20}{:>14.2}", "Delta", d.breakdown.delta)?;
        writeln!(f, "{:<20}{:>14.2}", "Gamma", d.breakdown.gamma)?;
        writeln!(f, "{:<20}{:>14.2}", "Theta", d.breakdown.theta)?;
        writeln!(f, "{:<20}{:>14.2}", "Vega", d.breakdown.vega)?;
        rule(f, 34)?;
        writeln!(f, "{:<20}{:>14.2}", "Approximate", d.total_approx)?;
        writeln!(f, "{:<20}{:>14.2}", "Exact", d.total_exact)?;
        writeln!(f, "{:<20}{:>14.2}", "Residual", d.residual)?;
        if d.higher_order_material() {
            writeln!(f, "Higher-order terms are material for this move")?;
        }
        Ok(())
    }
}

impl fmt::Display for Table<'_, PortfolioSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(
            f,
            "{} position(s), SPY at {:.2}",
            summary.len(),
            summary.spy_price_used
        )?;
        writeln!(f)?;
        write_legs(f, &summary.positions)?;
        writeln!(f)?;
        write_totals(f, &summary.totals)
    }
}

impl fmt::Display for Table<'_, HypotheticalImpact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let impact = self.0;
        writeln!(f, "New position (SPY at {:.2})", impact.spy_price_used)?;
        write_legs(f, std::slice::from_ref(&impact.new_position))?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<24}{:>14}{:>14}{:>14}",
            "", "Before", "After", "Change"
        )?;
        rule(f, 66)?;
        let (b, a, c) = (&impact.before.totals, &impact.after.totals, &impact.change);
        let rows = [
            ("Beta-weighted delta", b.beta_weighted_delta, a.beta_weighted_delta, c.beta_weighted_delta),
            ("Beta-weighted gamma", b.beta_weighted_gamma, a.beta_weighted_gamma, c.beta_weighted_gamma),
            ("Theta / day ($)", b.total_theta_per_day, a.total_theta_per_day, c.total_theta_per_day),
            ("Vega / vol pt ($)", b.total_vega_per_pct, a.total_vega_per_pct, c.total_vega_per_pct),
        ];
        for (name, before, after, change) in rows {
            writeln!(f, "{name:<24}{before:>14.4}{after:>14.4}{change:>+14.4}")?;
        }
        Ok(())
    }
}
