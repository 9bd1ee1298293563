use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate performance statistics over the closed trades of a ledger.
///
/// This struct is the output of the `StatsEngine` and serves as the
/// view-model for the dashboard's stat tiles. Every ratio carries an
/// explicit zero fallback, so a degenerate ledger (empty, or all-open)
/// produces a fully zeroed report instead of NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    // I. Counts
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,

    // II. Ratios
    /// `wins / total_trades * 100`; 0 when there are no closed trades.
    pub win_rate_pct: Decimal,
    /// `gross_profit / gross_loss`, saturating to `gross_profit` when the
    /// ledger has no losing PnL. The saturation is a deliberate policy so
    /// an all-winning ledger reports a finite factor.
    pub profit_factor: Decimal,

    // III. PnL sums and extremes
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    pub best_trade: Decimal,
    pub worst_trade: Decimal,
    pub avg_win: Decimal,
    pub avg_loss: Decimal,

    // IV. Directional breakdown
    pub long_win_rate_pct: Decimal,
    pub short_win_rate_pct: Decimal,
}

impl TradeStats {
    /// Creates a new, zeroed-out TradeStats.
    /// This is the correct result for an empty or all-open ledger.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            wins: 0,
            losses: 0,
            win_rate_pct: Decimal::ZERO,
            profit_factor: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            best_trade: Decimal::ZERO,
            worst_trade: Decimal::ZERO,
            avg_win: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            long_win_rate_pct: Decimal::ZERO,
            short_win_rate_pct: Decimal::ZERO,
        }
    }
}

impl Default for TradeStats {
    fn default() -> Self {
        Self::new()
    }
}
