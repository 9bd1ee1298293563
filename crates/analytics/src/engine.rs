use core_types::{Trade, TradeDirection, TradeOutcome};
use rust_decimal::Decimal;

use crate::report::TradeStats;

/// A stateless calculator for deriving performance metrics from a trade
/// ledger.
///
/// Only closed trades (`outcome != OPEN`) enter any statistic; open trades
/// are invisible to every count and sum. The engine is a pure function of
/// its input: the same ledger snapshot always produces the same report.
#[derive(Debug, Default)]
pub struct StatsEngine {}

impl StatsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the full statistics report for a ledger snapshot.
    pub fn compute(&self, trades: &[Trade]) -> TradeStats {
        let closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();

        let mut stats = TradeStats::new();
        if closed.is_empty() {
            // No closed trades: every metric stays at its zero fallback.
            return stats;
        }

        self.tally_outcomes(&closed, &mut stats);
        self.tally_pnl(&closed, &mut stats);
        self.tally_directions(&closed, &mut stats);

        tracing::debug!(
            total = stats.total_trades,
            wins = stats.wins,
            losses = stats.losses,
            "computed ledger stats"
        );

        stats
    }

    /// Counts and the headline win rate.
    fn tally_outcomes(&self, closed: &[&Trade], stats: &mut TradeStats) {
        stats.total_trades = closed.len();
        stats.wins = closed
            .iter()
            .filter(|t| t.outcome == TradeOutcome::Win)
            .count();
        stats.losses = closed
            .iter()
            .filter(|t| t.outcome == TradeOutcome::Loss)
            .count();

        // total_trades > 0 is guaranteed by the caller's empty check.
        stats.win_rate_pct = (Decimal::from(stats.wins) / Decimal::from(stats.total_trades))
            * Decimal::from(100);
    }

    /// Gross sums, profit factor, averages, and the PnL extremes.
    fn tally_pnl(&self, closed: &[&Trade], stats: &mut TradeStats) {
        for trade in closed {
            let pnl = trade.pnl_or_zero();
            if pnl > Decimal::ZERO {
                stats.gross_profit += pnl;
            } else if pnl < Decimal::ZERO {
                // Zero-PnL trades contribute to neither gross sum.
                stats.gross_loss += pnl.abs();
            }
        }

        // Saturation policy: with no losing PnL the factor equals the gross
        // profit, never infinity.
        stats.profit_factor = if stats.gross_loss > Decimal::ZERO {
            stats.gross_profit / stats.gross_loss
        } else {
            stats.gross_profit
        };

        if stats.wins > 0 {
            stats.avg_win = stats.gross_profit / Decimal::from(stats.wins);
        }
        if stats.losses > 0 {
            stats.avg_loss = stats.gross_loss / Decimal::from(stats.losses);
        }

        // Extremes via a stable descending-PnL sort, matching the ledger
        // views: first element is the best trade, last the worst.
        let mut by_pnl: Vec<&Trade> = closed.to_vec();
        by_pnl.sort_by(|a, b| b.pnl_or_zero().cmp(&a.pnl_or_zero()));
        stats.best_trade = by_pnl.first().map(|t| t.pnl_or_zero()).unwrap_or_default();
        stats.worst_trade = by_pnl.last().map(|t| t.pnl_or_zero()).unwrap_or_default();
    }

    /// Win rates restricted to each trade direction.
    fn tally_directions(&self, closed: &[&Trade], stats: &mut TradeStats) {
        stats.long_win_rate_pct = Self::direction_win_rate(closed, TradeDirection::Long);
        stats.short_win_rate_pct = Self::direction_win_rate(closed, TradeDirection::Short);
    }

    fn direction_win_rate(closed: &[&Trade], direction: TradeDirection) -> Decimal {
        let of_direction: Vec<&&Trade> =
            closed.iter().filter(|t| t.direction == direction).collect();
        if of_direction.is_empty() {
            return Decimal::ZERO;
        }
        let wins = of_direction
            .iter()
            .filter(|t| t.outcome == TradeOutcome::Win)
            .count();
        (Decimal::from(wins) / Decimal::from(of_direction.len())) * Decimal::from(100)
    }
}
