//! # EdgeLab
//!
//! The analytics core of a personal trading journal: aggregate performance
//! statistics, the equity curve, declarative drill-down filters over the
//! trade ledger, the what-if counterfactual simulator, and the pattern
//! aggregators behind the journal's charts.
//!
//! The workspace is layered: `core-types` defines the `Trade` record every
//! engine consumes; each Layer-1 crate is a pure, stateless calculator over
//! a ledger snapshot. This facade re-exports the whole public API so a
//! caller depends on one crate.
//!
//! The ledger itself is owned by the caller (persistence, import, UI) and
//! is only ever borrowed here. Every operation is total: degenerate input
//! produces zeroed or empty output, never an error.

pub use analytics::{EquityCurveBuilder, EquityPoint, StatsEngine, TradeStats};
pub use core_types::{CoreError, OptionType, Trade, TradeDirection, TradeOutcome};
pub use filters::{FilterEngine, FilterSelector};
pub use patterns::{
    DurationPoint, HourlyPnl, SetupPnl, WeekdayPnl, duration_scatter, hourly_pnl, top_setups,
    weekday_pnl,
};
pub use simulator::{ExclusionFilters, OptimizationStats, SimPoint, WhatIfSimulator};
