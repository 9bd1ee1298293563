use core_types::{Trade, TradeOutcome};

use crate::selector::FilterSelector;

/// Resolves a [`FilterSelector`] against a ledger snapshot.
///
/// The engine never mutates the ledger; it clones the matching trades into
/// a fresh, display-ordered list (descending by date, stable on ties) so
/// the caller can hand the result straight to the trade-list view.
#[derive(Debug, Default)]
pub struct FilterEngine {}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matching subset, sorted descending by date.
    ///
    /// Outcome-based selectors (`all_closed`, `wins`, `losses`, `best`,
    /// `worst`) see only closed trades; the calendar and direction
    /// selectors match the full ledger, open trades included.
    pub fn resolve(&self, trades: &[Trade], selector: &FilterSelector) -> Vec<Trade> {
        let mut matched: Vec<Trade> = match selector {
            FilterSelector::AllClosed => {
                trades.iter().filter(|t| t.is_closed()).cloned().collect()
            }
            FilterSelector::Wins => trades
                .iter()
                .filter(|t| t.outcome == TradeOutcome::Win)
                .cloned()
                .collect(),
            FilterSelector::Losses => trades
                .iter()
                .filter(|t| t.outcome == TradeOutcome::Loss)
                .cloned()
                .collect(),
            FilterSelector::Best => Self::extreme(trades, Extreme::Best),
            FilterSelector::Worst => Self::extreme(trades, Extreme::Worst),
            FilterSelector::Day { weekday } => trades
                .iter()
                .filter(|t| t.weekday().num_days_from_sunday() == u32::from(*weekday))
                .cloned()
                .collect(),
            FilterSelector::Direction { direction } => trades
                .iter()
                .filter(|t| t.direction == *direction)
                .cloned()
                .collect(),
            FilterSelector::Date { date } => {
                trades.iter().filter(|t| t.date == *date).cloned().collect()
            }
            FilterSelector::Unknown => Vec::new(),
        };

        // Display order regardless of which branch produced the subset.
        matched.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(?selector, matched = matched.len(), "resolved ledger filter");
        matched
    }

    /// The singleton extreme-PnL closed trade, or empty if none exist.
    ///
    /// Extremes come from a stable descending-PnL sort: ties on the maximum
    /// resolve to the earliest ledger position, ties on the minimum to the
    /// latest.
    fn extreme(trades: &[Trade], which: Extreme) -> Vec<Trade> {
        let mut closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        closed.sort_by(|a, b| b.pnl_or_zero().cmp(&a.pnl_or_zero()));

        let pick = match which {
            Extreme::Best => closed.first(),
            Extreme::Worst => closed.last(),
        };
        pick.map(|t| vec![(*t).clone()]).unwrap_or_default()
    }
}

enum Extreme {
    Best,
    Worst,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use core_types::TradeDirection;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn trade(id: &str, date: (i32, u32, u32), outcome: TradeOutcome, pnl: Option<Decimal>) -> Trade {
        Trade {
            id: id.to_string(),
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

    // 2024-03-11 is a Monday; 2024-03-15 a Friday.
    fn ledger() -> Vec<Trade> {
        vec![
            trade("mon-win", (2024, 3, 11), TradeOutcome::Win, Some(dec!(100))),
            trade("fri-loss", (2024, 3, 15), TradeOutcome::Loss, Some(dec!(-50))),
            trade("fri-open", (2024, 3, 15), TradeOutcome::Open, None),
            trade("tue-win", (2024, 3, 12), TradeOutcome::Win, Some(dec!(25))),
        ]
    }

    #[test]
    fn wins_selector_matches_exactly_the_win_outcomes() {
        let result = FilterEngine::new().resolve(&ledger(), &FilterSelector::Wins);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        // Descending by date.
        assert_eq!(ids, ["tue-win", "mon-win"]);
    }

    #[test]
    fn all_closed_excludes_open_and_sorts_descending() {
        let result = FilterEngine::new().resolve(&ledger(), &FilterSelector::AllClosed);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["fri-loss", "tue-win", "mon-win"]);
    }

    #[test]
    fn best_and_worst_resolve_to_singletons() {
        let engine = FilterEngine::new();
        let best = engine.resolve(&ledger(), &FilterSelector::Best);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].id, "mon-win");

        let worst = engine.resolve(&ledger(), &FilterSelector::Worst);
        assert_eq!(worst.len(), 1);
        assert_eq!(worst[0].id, "fri-loss");
    }

    #[test]
    fn best_tie_goes_to_earliest_ledger_position_worst_to_latest() {
        let ledger = vec![
            trade("first-max", (2024, 3, 11), TradeOutcome::Win, Some(dec!(100))),
            trade("second-max", (2024, 3, 12), TradeOutcome::Win, Some(dec!(100))),
            trade("first-min", (2024, 3, 13), TradeOutcome::Loss, Some(dec!(-30))),
            trade("second-min", (2024, 3, 14), TradeOutcome::Loss, Some(dec!(-30))),
        ];
        let engine = FilterEngine::new();
        assert_eq!(
            engine.resolve(&ledger, &FilterSelector::Best)[0].id,
            "first-max"
        );
        assert_eq!(
            engine.resolve(&ledger, &FilterSelector::Worst)[0].id,
            "second-min"
        );
    }

    #[test]
    fn best_on_all_open_ledger_is_empty() {
        let ledger = vec![trade("open", (2024, 3, 11), TradeOutcome::Open, None)];
        assert!(FilterEngine::new()
            .resolve(&ledger, &FilterSelector::Best)
            .is_empty());
    }

    #[test]
    fn day_selector_spans_the_full_ledger() {
        // Weekday 5 = Friday; the open Friday trade must match too.
        let result =
            FilterEngine::new().resolve(&ledger(), &FilterSelector::Day { weekday: 5 });
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"fri-loss"));
        assert!(ids.contains(&"fri-open"));
    }

    #[test]
    fn date_selector_matches_exact_dates_including_open() {
        let result = FilterEngine::new().resolve(
            &ledger(),
            &FilterSelector::Date {
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            },
        );
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn direction_selector_matches_full_ledger() {
        let mut ledger = ledger();
        ledger[2].direction = TradeDirection::Short;
        let result = FilterEngine::new().resolve(
            &ledger,
            &FilterSelector::Direction {
                direction: TradeDirection::Short,
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "fri-open");
    }

    #[test]
    fn unknown_selector_resolves_to_empty() {
        let selector: FilterSelector =
            serde_json::from_str(r#"{"kind": "by_moon_phase"}"#).unwrap();
        assert!(FilterEngine::new().resolve(&ledger(), &selector).is_empty());
    }

    #[test]
    fn out_of_range_weekday_matches_nothing() {
        assert!(FilterEngine::new()
            .resolve(&ledger(), &FilterSelector::Day { weekday: 9 })
            .is_empty());
    }
}
