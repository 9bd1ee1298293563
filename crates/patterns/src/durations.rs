use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One scatter point: holding time against realized PnL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationPoint {
    pub duration_mins: i64,
    pub pnl: Decimal,
}

/// Projects closed trades onto the duration/PnL plane, one point per trade.
///
/// No aggregation: a trade appears iff it has both a recorded duration and
/// a recorded PnL. An explicit zero PnL still plots; an absent one does not.
pub fn duration_scatter(trades: &[Trade]) -> Vec<DurationPoint> {
    trades
        .iter()
        .filter(|t| t.is_closed())
        .filter_map(|t| {
            let duration_mins = t.trade_duration_mins?;
            let pnl = t.pnl?;
            Some(DurationPoint { duration_mins, pnl })
        })
        .collect()
}
