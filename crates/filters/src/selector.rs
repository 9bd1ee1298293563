use chrono::NaiveDate;
use core_types::TradeDirection;
use serde::{Deserialize, Serialize};

/// A declarative drill-down selector over the trade ledger.
///
/// The dashboard emits one of these whenever the user clicks a stat tile, a
/// calendar day, or a chart segment; the engine resolves it into the
/// matching ledger subset. On the wire it is an internally tagged object,
/// e.g. `{"kind": "day", "weekday": 5}`.
///
/// A `kind` this version does not recognize deserializes to [`Unknown`]
/// and resolves to an empty result — fail-soft, not an error — so an older
/// engine never rejects a newer UI payload.
///
/// [`Unknown`]: FilterSelector::Unknown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSelector {
    /// Every closed trade.
    AllClosed,
    /// Closed trades with a WIN outcome.
    Wins,
    /// Closed trades with a LOSS outcome.
    Losses,
    /// The single best closed trade by PnL.
    Best,
    /// The single worst closed trade by PnL.
    Worst,
    /// Trades on a given day of the week, 0 = Sunday .. 6 = Saturday.
    /// Applies to the full ledger, open trades included.
    Day { weekday: u8 },
    /// Trades in a given direction, full ledger.
    Direction { direction: TradeDirection },
    /// Trades on an exact calendar date, full ledger.
    Date { date: NaiveDate },
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_deserialize_from_tagged_json() {
        let selector: FilterSelector = serde_json::from_str(r#"{"kind": "wins"}"#).unwrap();
        assert_eq!(selector, FilterSelector::Wins);

        let selector: FilterSelector =
            serde_json::from_str(r#"{"kind": "day", "weekday": 5}"#).unwrap();
        assert_eq!(selector, FilterSelector::Day { weekday: 5 });

        let selector: FilterSelector =
            serde_json::from_str(r#"{"kind": "direction", "direction": "SHORT"}"#).unwrap();
        assert_eq!(
            selector,
            FilterSelector::Direction {
                direction: TradeDirection::Short
            }
        );

        let selector: FilterSelector =
            serde_json::from_str(r#"{"kind": "date", "date": "2024-03-15"}"#).unwrap();
        assert_eq!(
            selector,
            FilterSelector::Date {
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
            }
        );
    }

    #[test]
    fn unrecognized_kind_becomes_unknown() {
        let selector: FilterSelector =
            serde_json::from_str(r#"{"kind": "by_moon_phase"}"#).unwrap();
        assert_eq!(selector, FilterSelector::Unknown);
    }
}
