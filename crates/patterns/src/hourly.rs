use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// First hour of the bucketed trading day.
pub const MARKET_OPEN_HOUR: u32 = 9;
/// Last hour of the bucketed trading day (inclusive).
pub const MARKET_CLOSE_HOUR: u32 = 15;

/// Summed PnL for one hour-of-day bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPnl {
    pub hour: u32,
    pub pnl: Decimal,
}

/// Buckets closed trades by entry hour over the fixed market-hours domain
/// (9–15 inclusive).
///
/// Every hour in the domain is present in the output, zero-filled if no
/// trade landed there. Trades with a missing or unreadable entry time, or
/// an entry hour outside the domain, are skipped.
pub fn hourly_pnl(trades: &[Trade]) -> Vec<HourlyPnl> {
    let mut buckets: Vec<HourlyPnl> = (MARKET_OPEN_HOUR..=MARKET_CLOSE_HOUR)
        .map(|hour| HourlyPnl {
            hour,
            pnl: Decimal::ZERO,
        })
        .collect();

    for trade in trades.iter().filter(|t| t.is_closed()) {
        let Some(hour) = trade.entry_hour() else {
            continue;
        };
        if !(MARKET_OPEN_HOUR..=MARKET_CLOSE_HOUR).contains(&hour) {
            continue;
        }
        buckets[(hour - MARKET_OPEN_HOUR) as usize].pnl += trade.pnl_or_zero();
    }

    buckets
}
