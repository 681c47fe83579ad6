//! Equity curve construction and maximum drawdown.

use chrono::{DateTime, Utc};
use core_types::{TimePeriod, Trade};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::report::SeriesPoint;

/// The cumulative-profit series over closed trades, plus the deepest
/// peak-to-trough decline observed along it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityCurve {
    pub points: Vec<SeriesPoint>,
    pub max_drawdown: Decimal,
}

/// Builds the equity curve from the settled trades in `trades`.
///
/// Trades are ordered ascending by `entry_time`; ties keep their input
/// order. The running total starts at zero, so drawdown is measured from
/// the highest cumulative profit seen so far rather than from any notion
/// of starting capital. Curve values are rounded to two decimal places;
/// drawdown is computed on the unrounded totals.
///
/// `period` only affects label granularity: hour-of-day labels for a
/// one-day window, calendar dates for week/month, months for a year.
pub fn build_equity_curve(trades: &[Trade], period: TimePeriod) -> EquityCurve {
    let closed = settled_sorted(trades);

    let mut points = Vec::with_capacity(closed.len());
    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for (trade, pnl) in closed {
        cumulative += pnl;
        points.push(SeriesPoint::new(
            point_label(trade.entry_time, period),
            cumulative.round_dp(2).to_f64().unwrap_or(0.0),
        ));
        if cumulative > peak {
            peak = cumulative;
        } else {
            let drawdown = peak - cumulative;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    EquityCurve {
        points,
        max_drawdown,
    }
}

/// Maximum drawdown of the settled trades in `trades`, without
/// materializing curve points. Same peak-tracking walk as
/// [`build_equity_curve`].
pub fn max_drawdown(trades: &[Trade]) -> Decimal {
    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for (_, pnl) in settled_sorted(trades) {
        cumulative += pnl;
        if cumulative > peak {
            peak = cumulative;
        } else {
            let drawdown = peak - cumulative;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }
    }

    max_drawdown
}

/// Settled trades paired with their net profit, stable-sorted by entry
/// time.
fn settled_sorted(trades: &[Trade]) -> Vec<(&Trade, Decimal)> {
    let mut closed: Vec<(&Trade, Decimal)> = trades
        .iter()
        .filter(|t| t.is_settled())
        .filter_map(|t| t.net_profit.map(|pnl| (t, pnl)))
        .collect();
    closed.sort_by_key(|(t, _)| t.entry_time);
    closed
}

/// Axis label for a curve point. Label granularity is a presentation
/// concern; the numeric contract does not depend on it.
pub(crate) fn point_label(timestamp: DateTime<Utc>, period: TimePeriod) -> String {
    match period {
        TimePeriod::Day => timestamp.format("%H:%M").to_string(),
        TimePeriod::Week | TimePeriod::Month => timestamp.format("%Y-%m-%d").to_string(),
        TimePeriod::Year => timestamp.format("%Y-%m").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal_macros::dec;

    #[test]
    fn curve_accumulates_and_tracks_drawdown() {
        let trades = vec![
            fixtures::closed(100, 0),
            fixtures::closed(-40, 1),
            fixtures::closed(60, 2),
        ];
        let curve = build_equity_curve(&trades, TimePeriod::Week);

        let values: Vec<f64> = curve.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 60.0, 120.0]);
        // Peak 100 to trough 60.
        assert_eq!(curve.max_drawdown, dec!(40));
    }

    #[test]
    fn non_decreasing_curve_has_zero_drawdown() {
        let trades = vec![fixtures::closed(10, 0), fixtures::closed(20, 1)];
        let curve = build_equity_curve(&trades, TimePeriod::Month);
        assert_eq!(curve.max_drawdown, Decimal::ZERO);
        assert_eq!(max_drawdown(&trades), Decimal::ZERO);
    }

    #[test]
    fn open_trades_are_excluded() {
        let trades = vec![fixtures::open(0), fixtures::closed(50, 1)];
        let curve = build_equity_curve(&trades, TimePeriod::Week);
        assert_eq!(curve.points.len(), 1);
        assert_eq!(curve.points[0].value, 50.0);
    }

    #[test]
    fn trades_are_ordered_by_entry_time() {
        // Entered out of order; the curve must still walk chronologically.
        let trades = vec![fixtures::closed(-30, 5), fixtures::closed(100, 0)];
        let curve = build_equity_curve(&trades, TimePeriod::Week);
        let values: Vec<f64> = curve.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 70.0]);
        assert_eq!(max_drawdown(&trades), dec!(30));
    }

    #[test]
    fn label_granularity_follows_period() {
        let ts = fixtures::base_time();
        assert_eq!(point_label(ts, TimePeriod::Day), "10:00");
        assert_eq!(point_label(ts, TimePeriod::Week), "2024-03-04");
        assert_eq!(point_label(ts, TimePeriod::Year), "2024-03");
    }

    #[test]
    fn empty_input_yields_empty_curve() {
        let curve = build_equity_curve(&[], TimePeriod::Day);
        assert!(curve.points.is_empty());
        assert_eq!(curve.max_drawdown, Decimal::ZERO);
    }
}
