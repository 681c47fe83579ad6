//! Relative time-window filtering.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc, Weekday};
use core_types::{TimePeriod, Trade};

/// Returns the trades entered at or after the window's start.
///
/// `now` is an explicit parameter rather than an ambient clock read so
/// that results are deterministic and testable; callers pass
/// `Utc::now()` in production. No upper bound is applied — a trade
/// timestamped slightly in the future (clock skew) stays in.
pub fn filter_window(trades: &[Trade], period: TimePeriod, now: DateTime<Utc>) -> Vec<Trade> {
    let cutoff = window_start(period, now);
    trades
        .iter()
        .filter(|t| t.entry_time >= cutoff)
        .cloned()
        .collect()
}

/// The window's lower bound: midnight at the start of the current day,
/// ISO week (Monday), month, or year containing `now`.
pub fn window_start(period: TimePeriod, now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let start_date = match period {
        TimePeriod::Day => today,
        TimePeriod::Week => today.week(Weekday::Mon).first_day(),
        TimePeriod::Month => today.with_day(1).unwrap_or(today),
        TimePeriod::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
    };
    start_date.and_time(NaiveTime::MIN).and_utc()
}
