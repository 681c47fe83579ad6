use crate::enums::{TradeDirection, TradeStatus};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journaled trade.
///
/// This is the engine's only input type. Records arrive from the journal's
/// persistence layer already deserialized; the analytics crate treats them
/// as immutable and never mutates or persists them. Optional fields model
/// the reality of a hand-kept journal: an open trade has no exit yet, and
/// classification fields (strategy, emotions, account) are filled in only
/// when the trader bothered to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    pub symbol: String,
    pub direction: TradeDirection,
    pub lot_size: Decimal,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub entry_time: DateTime<Utc>,
    /// Present only once the trade is closed.
    pub exit_time: Option<DateTime<Utc>>,
    /// Signed realized profit. Meaningful only when `status` is `Closed`;
    /// anything else is filtered out by the analytics layer, not coerced.
    pub net_profit: Option<Decimal>,
    pub status: TradeStatus,
    pub strategy_name: Option<String>,
    pub emotion_before: Option<String>,
    pub emotion_after: Option<String>,
    pub account_id: Option<String>,
    /// Holding duration in minutes, precomputed by the journal at close
    /// time. Not derived from the timestamps when absent.
    pub duration_minutes: Option<i64>,
}

impl Trade {
    /// Checks the cross-field consistency a well-formed journal record must
    /// have. This runs at the ingestion boundary so that the analytics
    /// layer can assume field presence follows `status`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.status == TradeStatus::Closed {
            if self.net_profit.is_none() {
                return Err(CoreError::InvalidTrade(
                    self.id.to_string(),
                    "closed trade has no net_profit".to_string(),
                ));
            }
            if self.exit_time.is_none() {
                return Err(CoreError::InvalidTrade(
                    self.id.to_string(),
                    "closed trade has no exit_time".to_string(),
                ));
            }
        }
        if let Some(exit_time) = self.exit_time {
            if exit_time < self.entry_time {
                return Err(CoreError::InvalidTrade(
                    self.id.to_string(),
                    "exit_time precedes entry_time".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// True when this trade contributes to profit/loss statistics.
    pub fn is_settled(&self) -> bool {
        self.status == TradeStatus::Closed && self.net_profit.is_some()
    }
}
