//! # EdgeLab Analytics Engine
//!
//! This crate derives aggregate performance statistics and the equity curve
//! from a trade ledger. It is the numeric heart of the journal's dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate with no knowledge of external
//!   systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** `StatsEngine` and `EquityCurveBuilder` are
//!   stateless calculators. They take a ledger snapshot as input and produce
//!   plain data records as output, so every render recomputes from scratch
//!   and two structurally identical ledgers always yield identical results.
//! - **Total Functions:** Degenerate ledgers (empty, all-open) produce
//!   zeroed outputs — never an error, never NaN or infinity.
//!
//! ## Public API
//!
//! - `StatsEngine` / `TradeStats`: the aggregate statistics calculation.
//! - `EquityCurveBuilder` / `EquityPoint`: the cumulative-PnL series.

// Declare the modules that constitute this crate.
pub mod curve;
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use curve::{EquityCurveBuilder, EquityPoint};
pub use engine::StatsEngine;
pub use report::TradeStats;
