//! # EdgeLab What-If Simulator
//!
//! The "what-if eraser": a counterfactual replay of the closed-trade
//! history with selected categories of trades erased, used to quantify the
//! cost of specific behavioral patterns (mistake-tagged trades, Fridays,
//! scalps under five minutes, late-afternoon entries).
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Depends only on `core-types`.
//! - **Stateless Replay:** Nothing is memoized between runs; the caller
//!   re-runs the full simulation whenever the ledger or the toggles change.

pub mod engine;
pub mod exclusions;

pub use engine::{OptimizationStats, SimPoint, WhatIfSimulator};
pub use exclusions::{
    ExclusionFilters, LATE_ENTRY_CUTOFF_HOUR, SHORT_DURATION_THRESHOLD_MINS,
};
