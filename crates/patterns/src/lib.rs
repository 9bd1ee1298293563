//! # EdgeLab Pattern Aggregators
//!
//! A family of independent pure reducers that group ledger PnL for the
//! journal's pattern charts: by entry hour, by setup name, by holding time,
//! and by day of the week. These feed visualization only — nothing in the
//! workspace branches on their output.

pub mod durations;
pub mod hourly;
pub mod setups;
pub mod weekdays;

pub use durations::{DurationPoint, duration_scatter};
pub use hourly::{HourlyPnl, MARKET_CLOSE_HOUR, MARKET_OPEN_HOUR, hourly_pnl};
pub use setups::{SetupPnl, TOP_SETUP_COUNT, top_setups};
pub use weekdays::{WeekdayPnl, weekday_pnl};
