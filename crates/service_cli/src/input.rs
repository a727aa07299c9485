//! Input file loading.
//!
//! Every input is TOML. A position file is one option position, a
//! portfolio file is a `[[positions]]` array, a new-position file is a
//! single tagged position and a market file is a [`MarketSnapshot`].

use std::path::Path;

use chrono::NaiveDate;
use pricer_models::instruments::{OptionPosition, OptionSpec};
use pricer_risk::portfolio::{resolve_positions, MarketSnapshot, PortfolioPosition, PositionInput};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// A single option position. `entry_price` defaults to the theoretical price.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionFile {
    /// Option terms and market inputs
    #[serde(flatten)]
    pub spec: OptionSpec,
    /// Signed contract count
    pub contracts: i64,
    /// Premium paid per share
    #[serde(default)]
    pub entry_price: Option<f64>,
}

impl PositionFile {
    /// Validate the option terms and build the position.
    pub fn into_position(self) -> Result<OptionPosition> {
        self.spec.validate()?;
        Ok(match self.entry_price {
            Some(entry_price) => OptionPosition::new(self.spec, self.contracts, entry_price),
            None => OptionPosition::at_theoretical_entry(self.spec, self.contracts),
        })
    }
}

/// An existing portfolio.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioFile {
    /// Positions in aggregation order
    #[serde(default)]
    pub positions: Vec<PositionInput>,
}

impl PortfolioFile {
    /// Resolve every position against the snapshot.
    pub fn resolve(
        &self,
        snapshot: &MarketSnapshot,
        valuation_date: NaiveDate,
    ) -> Result<Vec<PortfolioPosition>> {
        Ok(resolve_positions(&self.positions, snapshot, valuation_date)?)
    }
}

/// Read a file, reporting a missing path as [`CliError::FileNotFound`].
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Read and deserialise a TOML file.
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = read_file(path)?;
    parse_toml(&content, &path.display().to_string())
}

/// Deserialise TOML text; `source` names it in error messages.
pub fn parse_toml<T: DeserializeOwned>(content: &str, source: &str) -> Result<T> {
    toml::from_str(content).map_err(|e| CliError::parse(source, e.to_string()))
}

/// Load and validate a single option position.
pub fn load_position(path: impl AsRef<Path>) -> Result<OptionPosition> {
    load_toml::<PositionFile>(path)?.into_position()
}

/// Parse `YYYY-MM-DD`, defaulting to today's local date.
pub fn valuation_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| CliError::InvalidArgument(format!("invalid date '{s}': {e}"))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::PricingError;
    use pricer_models::instruments::OptionType;

    #[test]
    fn test_position_file_without_entry_price() {
        let file: PositionFile = parse_toml(
            r#"
            option_type = "call"
            spot = 100.0
            strike = 100.0
            time_to_expiry = 0.0821917808
            rate = 0.043
            volatility = 0.30
            contracts = 2
            "#,
            "inline",
        )
        .unwrap();

        assert_eq!(file.spec.option_type, OptionType::Call);
        assert_eq!(file.spec.dividend_yield, 0.0);
        let position = file.into_position().unwrap();
        assert_eq!(position.contracts, 2);
        assert!(position.unrealized_pnl().abs() < 1e-12);
    }

    #[test]
    fn test_position_file_rejects_bad_spot() {
        let file: PositionFile = parse_toml(
            r#"
            option_type = "put"
            spot = -5.0
            strike = 100.0
            time_to_expiry = 0.5
            rate = 0.043
            volatility = 0.30
            contracts = 1
            entry_price = 4.0
            "#,
            "inline",
        )
        .unwrap();

        assert!(matches!(
            file.into_position(),
            Err(CliError::Pricing(PricingError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_parse_error_names_source() {
        let err = parse_toml::<PortfolioFile>("positions = 3", "book.toml").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse book.toml"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_file("no/such/position.toml").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_valuation_date() {
        assert_eq!(
            valuation_date(Some("2026-10-16")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert!(matches!(
            valuation_date(Some("16/10/2026")),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
