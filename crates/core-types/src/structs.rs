use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{OptionType, TradeDirection, TradeOutcome};

/// A single journal entry for a discretionary option trade.
///
/// The ledger is owned by the caller (persistence/import layer); the
/// analytics crates treat `&[Trade]` as an immutable snapshot and never
/// mutate it. Field names follow the journal UI's camelCase JSON, so an
/// exported ledger deserializes directly.
///
/// `pnl` is `Option` on purpose: an absent value is counted as zero wherever
/// a sum is needed, but stays distinguishable from an explicit break-even
/// zero for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Opaque unique identifier, assigned by the caller.
    pub id: String,

    /// Calendar date of the trade (local; no timezone semantics).
    pub date: NaiveDate,

    /// Entry clock time as a raw `HH:MM` string. Kept unparsed so a
    /// malformed value degrades per-record instead of failing the whole
    /// ledger; see [`Trade::entry_hour`].
    #[serde(default)]
    pub entry_time: Option<String>,

    /// Exit clock time as a raw `HH:MM` string.
    #[serde(default)]
    pub exit_time: Option<String>,

    pub direction: TradeDirection,

    pub outcome: TradeOutcome,

    /// Signed profit/loss. `None` means "not recorded", not zero.
    #[serde(default)]
    pub pnl: Option<Decimal>,

    /// Free-text mistake tags. Any tag present flags the trade for the
    /// what-if simulator's mistake exclusion.
    #[serde(default)]
    pub mistakes: Vec<String>,

    /// Holding time in minutes; `None` is treated as 0 in threshold checks.
    #[serde(default)]
    pub trade_duration_mins: Option<i64>,

    // Descriptive/classification fields, used only for grouping.
    #[serde(default)]
    pub setup_name: Option<String>,
    #[serde(default)]
    pub instrument: Option<String>,
    #[serde(default)]
    pub strike_price: Option<Decimal>,
    #[serde(default)]
    pub option_type: Option<OptionType>,
}

impl Trade {
    /// Whether the trade counts toward closed-trade statistics.
    pub fn is_closed(&self) -> bool {
        self.outcome.is_closed()
    }

    /// PnL with absence collapsed to zero, for summation.
    pub fn pnl_or_zero(&self) -> Decimal {
        self.pnl.unwrap_or(Decimal::ZERO)
    }

    /// Whether any mistake tag was recorded.
    pub fn has_mistakes(&self) -> bool {
        !self.mistakes.is_empty()
    }

    /// Holding time with absence collapsed to zero, for threshold checks.
    pub fn duration_mins_or_zero(&self) -> i64 {
        self.trade_duration_mins.unwrap_or(0)
    }

    /// The hour component of `entry_time`, extracted fail-soft.
    ///
    /// Returns `None` for a missing entry time, a string without a `:`, a
    /// non-numeric hour, or an hour outside `0..24`. Callers skip the record
    /// rather than propagate an error.
    pub fn entry_hour(&self) -> Option<u32> {
        let raw = self.entry_time.as_deref()?;
        let (hour, _minute) = raw.split_once(':')?;
        let hour: u32 = hour.trim().parse().ok()?;
        (hour < 24).then_some(hour)
    }

    /// Day of week of the trade date.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
