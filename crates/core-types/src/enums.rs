use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Long,
    Short,
}

impl FromStr for TradeDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LONG" => Ok(TradeDirection::Long),
            "SHORT" => Ok(TradeDirection::Short),
            other => Err(CoreError::InvalidInput(
                "direction".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// The recorded result of a trade.
///
/// `Open` is the only non-terminal state; every closed-trade statistic in the
/// workspace filters on [`TradeOutcome::is_closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeOutcome {
    Open,
    Win,
    Loss,
    BreakEven,
    Skipped,
}

impl TradeOutcome {
    /// Whether the trade has been resolved (anything but `Open`).
    pub fn is_closed(self) -> bool {
        !matches!(self, TradeOutcome::Open)
    }
}

impl FromStr for TradeOutcome {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(TradeOutcome::Open),
            "WIN" => Ok(TradeOutcome::Win),
            "LOSS" => Ok(TradeOutcome::Loss),
            "BREAK_EVEN" => Ok(TradeOutcome::BreakEven),
            "SKIPPED" => Ok(TradeOutcome::Skipped),
            other => Err(CoreError::InvalidInput(
                "outcome".to_string(),
                other.to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    Call,
    Put,
}

impl FromStr for OptionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CALL" => Ok(OptionType::Call),
            "PUT" => Ok(OptionType::Put),
            other => Err(CoreError::InvalidInput(
                "option type".to_string(),
                other.to_string(),
            )),
        }
    }
}
