use serde::{Deserialize, Serialize};

/// The direction of a journaled trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Long,
    Short,
}

/// Lifecycle state of a journal entry. Only `Closed` trades carry a
/// meaningful `net_profit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
    Cancelled,
}

/// A relative time window anchored to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    /// Since the start of the current calendar day.
    Day,
    /// Since Monday 00:00 of the current ISO week.
    Week,
    /// Since the first of the current month.
    Month,
    /// Since January 1 of the current year.
    Year,
}
