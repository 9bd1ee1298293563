use chrono::NaiveDate;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::exclusions::ExclusionFilters;

/// One step of the counterfactual replay: both running totals after this
/// trade was included (actual) and included-or-erased (simulated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimPoint {
    pub date: NaiveDate,
    pub actual: Decimal,
    pub simulated: Decimal,
}

/// Summary of a finished replay, taken from its final point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationStats {
    /// `sim - actual`: what the erased trades cost (positive = erasing
    /// them would have helped).
    pub delta: Decimal,
    /// `delta / |actual| * 100`; 0 when the actual total is 0.
    pub pct: Decimal,
    pub actual: Decimal,
    pub sim: Decimal,
}

impl OptimizationStats {
    fn zeroed() -> Self {
        Self {
            delta: Decimal::ZERO,
            pct: Decimal::ZERO,
            actual: Decimal::ZERO,
            sim: Decimal::ZERO,
        }
    }
}

/// Replays the closed-trade history under a set of exclusion rules.
///
/// The simulator holds no state between invocations: every call walks the
/// ledger from scratch, so the caller simply re-runs it whenever the ledger
/// or the toggles change.
#[derive(Debug, Default)]
pub struct WhatIfSimulator {}

impl WhatIfSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the closed trades in stable ascending date order, keeping two
    /// running totals: `actual` accumulates every trade's PnL, `simulated`
    /// only the trades no enabled rule erases. Emits one point per trade.
    pub fn simulate(&self, trades: &[Trade], filters: &ExclusionFilters) -> Vec<SimPoint> {
        let mut closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        closed.sort_by(|a, b| a.date.cmp(&b.date));

        let mut actual = Decimal::ZERO;
        let mut simulated = Decimal::ZERO;
        let mut erased = 0usize;

        let points = closed
            .iter()
            .map(|trade| {
                let pnl = trade.pnl_or_zero();
                actual += pnl;
                if filters.excludes(trade) {
                    erased += 1;
                } else {
                    simulated += pnl;
                }
                SimPoint {
                    date: trade.date,
                    actual,
                    simulated,
                }
            })
            .collect();

        tracing::debug!(
            trades = closed.len(),
            erased,
            ?filters,
            "replayed ledger under exclusion rules"
        );

        points
    }

    /// The optimization delta of a finished replay. Empty input yields
    /// all-zero stats.
    pub fn optimization_stats(&self, points: &[SimPoint]) -> OptimizationStats {
        let Some(last) = points.last() else {
            return OptimizationStats::zeroed();
        };

        let delta = last.simulated - last.actual;
        let pct = if last.actual.is_zero() {
            Decimal::ZERO
        } else {
            delta / last.actual.abs() * Decimal::from(100)
        };

        OptimizationStats {
            delta,
            pct,
            actual: last.actual,
            sim: last.simulated,
        }
    }
}
