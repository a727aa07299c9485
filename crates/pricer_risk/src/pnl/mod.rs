//! Position P&L attribution.

pub mod decomposer;

pub use decomposer::{
    pnl_decomposition, PnLBreakdown, PnLDecomposer, PnLDecomposition, PnLInputs, PnLScenario,
    HIGHER_ORDER_THRESHOLD, MIN_REPRICE_VOLATILITY,
};
