use std::collections::BTreeMap;

use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How many setups the ranking keeps.
pub const TOP_SETUP_COUNT: usize = 5;

/// Total PnL attributed to one named setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupPnl {
    pub setup: String,
    pub pnl: Decimal,
}

/// Sums closed-trade PnL per trimmed, non-empty setup name and returns the
/// top five by total, descending.
///
/// Trades without a setup name are dropped, not bucketed under a
/// placeholder label. Equal totals rank alphabetically (the grouping map
/// iterates in name order and the sort is stable).
pub fn top_setups(trades: &[Trade]) -> Vec<SetupPnl> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for trade in trades.iter().filter(|t| t.is_closed()) {
        let Some(name) = trade.setup_name.as_deref().map(str::trim) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        *totals.entry(name).or_insert(Decimal::ZERO) += trade.pnl_or_zero();
    }

    let mut ranked: Vec<SetupPnl> = totals
        .into_iter()
        .map(|(setup, pnl)| SetupPnl {
            setup: setup.to_string(),
            pnl,
        })
        .collect();
    ranked.sort_by(|a, b| b.pnl.cmp(&a.pnl));
    ranked.truncate(TOP_SETUP_COUNT);
    ranked
}
