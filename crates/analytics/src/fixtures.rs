//! Shared trade builders for unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_types::{Trade, TradeDirection, TradeStatus};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Monday, 2024-03-04 10:00 UTC.
pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
}

/// A closed trade with the given net profit, entered `offset_hours` after
/// `base_time` and held for one hour.
pub(crate) fn closed(profit: i64, offset_hours: i64) -> Trade {
    let entry_time = base_time() + Duration::hours(offset_hours);
    Trade {
        id: Uuid::new_v4(),
        symbol: "EURUSD".to_string(),
        direction: TradeDirection::Long,
        lot_size: Decimal::ONE,
        entry_price: Decimal::from(100),
        exit_price: Some(Decimal::from(100) + Decimal::from(profit)),
        stop_loss: None,
        take_profit: None,
        entry_time,
        exit_time: Some(entry_time + Duration::hours(1)),
        net_profit: Some(Decimal::from(profit)),
        status: TradeStatus::Closed,
        strategy_name: None,
        emotion_before: None,
        emotion_after: None,
        account_id: None,
        duration_minutes: Some(60),
    }
}

/// An open trade entered `offset_hours` after `base_time`. Carries no exit
/// data and must be invisible to every profit-based statistic.
pub(crate) fn open(offset_hours: i64) -> Trade {
    let entry_time = base_time() + Duration::hours(offset_hours);
    Trade {
        id: Uuid::new_v4(),
        symbol: "EURUSD".to_string(),
        direction: TradeDirection::Short,
        lot_size: Decimal::ONE,
        entry_price: Decimal::from(100),
        exit_price: None,
        stop_loss: None,
        take_profit: None,
        entry_time,
        exit_time: None,
        net_profit: None,
        status: TradeStatus::Open,
        strategy_name: None,
        emotion_before: None,
        emotion_after: None,
        account_id: None,
        duration_minutes: None,
    }
}
