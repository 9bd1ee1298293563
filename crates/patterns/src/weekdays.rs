use chrono::Datelike;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Summed PnL for one day of the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPnl {
    pub weekday: String,
    pub pnl: Decimal,
}

/// Buckets the FULL ledger by weekday, exposing Monday through Friday in
/// fixed order.
///
/// Unlike the closed-trade statistics, open trades participate here — their
/// absent PnL simply contributes zero. Weekend buckets are computed
/// internally but not exposed; the journal targets weekday markets.
pub fn weekday_pnl(trades: &[Trade]) -> Vec<WeekdayPnl> {
    let mut totals = [Decimal::ZERO; 7];
    for trade in trades {
        totals[trade.date.weekday().num_days_from_monday() as usize] += trade.pnl_or_zero();
    }

    totals
        .into_iter()
        .take(5)
        .enumerate()
        .map(|(i, pnl)| WeekdayPnl {
            weekday: WEEKDAY_LABELS[i].to_string(),
            pnl,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use core_types::{TradeDirection, TradeOutcome};
    use rust_decimal_macros::dec;

    use super::*;

    fn trade(date: (i32, u32, u32), outcome: TradeOutcome, pnl: Option<Decimal>) -> Trade {
        Trade {
            id: "t".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            entry_time: None,
            exit_time: None,
            direction: TradeDirection::Long,
            outcome,
            pnl,
            mistakes: vec![],
            trade_duration_mins: None,
            setup_name: None,
            instrument: None,
            strike_price: None,
            option_type: None,
        }
    }

    #[test]
    fn buckets_monday_through_friday_in_fixed_order() {
        let ledger = vec![
            // 2024-03-11 Mon, 2024-03-15 Fri, 2024-03-16 Sat.
            trade((2024, 3, 11), TradeOutcome::Win, Some(dec!(100))),
            trade((2024, 3, 15), TradeOutcome::Loss, Some(dec!(-40))),
            trade((2024, 3, 16), TradeOutcome::Win, Some(dec!(999))),
        ];
        let buckets = weekday_pnl(&ledger);

        let labels: Vec<&str> = buckets.iter().map(|b| b.weekday.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri"]);
        assert_eq!(buckets[0].pnl, dec!(100));
        assert_eq!(buckets[4].pnl, dec!(-40));
        // The Saturday trade is bucketed internally but never exposed.
        assert!(buckets.iter().all(|b| b.pnl != dec!(999)));
    }

    #[test]
    fn open_trades_contribute_zero_not_nothing() {
        let ledger = vec![trade((2024, 3, 11), TradeOutcome::Open, None)];
        let buckets = weekday_pnl(&ledger);
        assert_eq!(buckets[0].pnl, Decimal::ZERO);
    }
}
