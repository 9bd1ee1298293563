use chrono::NaiveDate;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the cumulative-PnL curve.
///
/// Carries the source trade's id and date so the rendering layer can link a
/// point back to its ledger row (tooltip drill-down).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub trade_id: String,
    pub date: NaiveDate,
    /// Running cumulative PnL after this trade.
    pub equity: Decimal,
}

/// Builds the chronological cumulative-PnL series for a ledger snapshot.
///
/// The curve is recomputed fresh on every call; there is no incremental
/// state to invalidate. Recomputing over the same ledger always yields the
/// identical sequence.
#[derive(Debug, Default)]
pub struct EquityCurveBuilder {}

impl EquityCurveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One point per closed trade, ascending by date.
    ///
    /// The sort is stable: same-date trades keep their relative ledger
    /// order. Absent PnL counts as zero, so such trades appear as flat
    /// segments rather than gaps.
    pub fn build(&self, trades: &[Trade]) -> Vec<EquityPoint> {
        let mut closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        closed.sort_by(|a, b| a.date.cmp(&b.date));

        let mut equity = Decimal::ZERO;
        closed
            .iter()
            .map(|trade| {
                equity += trade.pnl_or_zero();
                EquityPoint {
                    trade_id: trade.id.clone(),
                    date: trade.date,
                    equity,
                }
            })
            .collect()
    }
}
