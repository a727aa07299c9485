//! optionlab - option risk from the command line
//!
//! # Commands
//!
//! - `optionlab greeks --position <file>` - Greeks of one option position
//! - `optionlab scenario --position <file>` - price-move × IV-regime P&L grid
//! - `optionlab pnl --position <file>` - Greek attribution of a P&L move
//! - `optionlab portfolio --portfolio <file> --market <file>` - beta-weighted totals
//! - `optionlab impact --portfolio <file> --market <file> --new-position <file>`
//!   - before/after/change of adding a position

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use service_cli::commands::{self, Context};
use service_cli::{CliConfig, OutputFormat, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Option Greeks, scenarios and portfolio risk
#[derive(Parser)]
#[command(name = "optionlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optionlab.toml")]
    config: PathBuf,

    /// Output format (overrides the configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Greeks of a single option position
    Greeks {
        /// Position file (TOML)
        #[arg(short, long)]
        position: PathBuf,
    },

    /// Scenario grid and Greek attribution for a single option position
    Scenario {
        /// Position file (TOML)
        #[arg(short, long)]
        position: PathBuf,

        /// Calendar days to roll forward
        #[arg(short, long, default_value_t = 0)]
        days_forward: u32,
    },

    /// Attribute a P&L move to delta, gamma, theta and vega
    Pnl {
        /// Position file (TOML)
        #[arg(short, long)]
        position: PathBuf,

        /// Dollar change of the underlying
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        price_move: f64,

        /// Absolute change in implied volatility, decimal (-0.05 = 5 vol points lower)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        iv_change: f64,

        /// Calendar days elapsed
        #[arg(long, default_value_t = 0)]
        days_elapsed: u32,
    },

    /// Beta-weighted Greeks of a portfolio
    Portfolio {
        /// Portfolio file (TOML)
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Market snapshot file (TOML)
        #[arg(short, long)]
        market: PathBuf,

        /// Valuation date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Portfolio exposure before and after adding one position
    Impact {
        /// Portfolio file (TOML)
        #[arg(short, long)]
        portfolio: PathBuf,

        /// Market snapshot file (TOML)
        #[arg(short, long)]
        market: PathBuf,

        /// New position file (TOML)
        #[arg(short, long)]
        new_position: PathBuf,

        /// Valuation date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(&cli.config)?.with_env_override();
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.validate()?;

    init_tracing(&config.log_level);
    info!("Configuration: {}", cli.config.display());

    let ctx = Context::from_config(&config)?;

    let output = match cli.command {
        Commands::Greeks { position } => commands::greeks::run(&ctx, &position),
        Commands::Scenario {
            position,
            days_forward,
        } => commands::scenario::run(&ctx, &position, days_forward),
        Commands::Pnl {
            position,
            price_move,
            iv_change,
            days_elapsed,
        } => commands::pnl::run(&ctx, &position, price_move, iv_change, days_elapsed),
        Commands::Portfolio {
            portfolio,
            market,
            date,
        } => commands::portfolio::run(&ctx, &portfolio, &market, date.as_deref()),
        Commands::Impact {
            portfolio,
            market,
            new_position,
            date,
        } => commands::impact::run(&ctx, &portfolio, &market, &new_position, date.as_deref()),
    }?;

    println!("{output}");
    Ok(())
}
