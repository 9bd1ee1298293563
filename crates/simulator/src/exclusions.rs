use chrono::Weekday;
use core_types::Trade;
use serde::{Deserialize, Serialize};

/// Trades held for less than this many minutes count as "short duration".
pub const SHORT_DURATION_THRESHOLD_MINS: i64 = 5;

/// Entries at or after this hour count as "after 2 PM".
pub const LATE_ENTRY_CUTOFF_HOUR: u32 = 14;

/// Independent on/off toggles for the what-if eraser.
///
/// Each toggle names a category of trades to erase from the counterfactual
/// equity path. The toggles are OR-ed: a trade is dropped from the
/// simulation when it matches *any* enabled rule. All off (the default)
/// reproduces the actual equity path exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExclusionFilters {
    /// Erase trades carrying any mistake tag.
    pub exclude_mistakes: bool,
    /// Erase trades dated on a Friday.
    pub exclude_fridays: bool,
    /// Erase trades held under [`SHORT_DURATION_THRESHOLD_MINS`] minutes.
    /// A missing duration counts as zero, so it is erased too.
    pub exclude_short_duration: bool,
    /// Erase trades entered at or after [`LATE_ENTRY_CUTOFF_HOUR`]. A
    /// missing or malformed entry time cannot match this rule.
    pub exclude_after_2pm: bool,
}

impl ExclusionFilters {
    /// Whether any rule is enabled at all.
    pub fn any_enabled(&self) -> bool {
        self.exclude_mistakes
            || self.exclude_fridays
            || self.exclude_short_duration
            || self.exclude_after_2pm
    }

    /// Whether an enabled rule erases this trade from the simulated path.
    pub fn excludes(&self, trade: &Trade) -> bool {
        if self.exclude_mistakes && trade.has_mistakes() {
            return true;
        }
        if self.exclude_fridays && trade.weekday() == Weekday::Fri {
            return true;
        }
        if self.exclude_short_duration
            && trade.duration_mins_or_zero() < SHORT_DURATION_THRESHOLD_MINS
        {
            return true;
        }
        if self.exclude_after_2pm
            && trade
                .entry_hour()
                .is_some_and(|hour| hour >= LATE_ENTRY_CUTOFF_HOUR)
        {
            return true;
        }
        false
    }
}
