//! Trailing-window win-rate series.

use chrono::{DateTime, Utc};
use core_types::Trade;
use rust_decimal::Decimal;

use crate::report::SeriesPoint;

/// Smallest trailing window; below this the rolling rate is too noisy to
/// plot.
const MIN_WINDOW: usize = 10;

/// Target number of points after down-sampling.
const MAX_POINTS: usize = 20;

/// Computes the rolling win-rate series over closed trades, ordered by
/// exit time.
///
/// The window adapts to the history size, `max(10, n/20)`, so the metric
/// stays meaningful for both short and long journals. A history shorter
/// than the window produces a single point covering all of it. The series
/// is down-sampled to roughly [`MAX_POINTS`] points, always keeping the
/// final one.
pub fn rolling_win_rate(trades: &[Trade]) -> Vec<SeriesPoint> {
    let mut eligible: Vec<(DateTime<Utc>, Decimal)> = trades
        .iter()
        .filter(|t| t.is_settled())
        .filter_map(|t| match (t.net_profit, t.exit_time) {
            (Some(pnl), Some(exit_time)) => Some((exit_time, pnl)),
            _ => None,
        })
        .collect();
    eligible.sort_by_key(|(exit_time, _)| *exit_time);

    let n = eligible.len();
    if n == 0 {
        return Vec::new();
    }

    let window = usize::max(MIN_WINDOW, n / MAX_POINTS);
    if n < window {
        return vec![window_point(&eligible, n - 1)];
    }

    let series: Vec<SeriesPoint> = ((window - 1)..n)
        .map(|i| window_point(&eligible[i + 1 - window..=i], window - 1))
        .collect();
    downsample(series)
}

/// The win rate over `slice`, labeled with the exit date of its trade at
/// `last` (the most recent one).
fn window_point(slice: &[(DateTime<Utc>, Decimal)], last: usize) -> SeriesPoint {
    let wins = slice
        .iter()
        .filter(|(_, pnl)| *pnl > Decimal::ZERO)
        .count();
    let rate = 100.0 * wins as f64 / slice.len() as f64;
    SeriesPoint {
        label: slice[last].0.format("%Y-%m-%d").to_string(),
        value: rate,
        count: Some(slice.len()),
        win_rate_pct: Some(rate),
    }
}

/// Keeps every `step`-th point plus the final one, bounding the render
/// payload without materially distorting the trend.
fn downsample(series: Vec<SeriesPoint>) -> Vec<SeriesPoint> {
    let step = usize::max(1, series.len() / MAX_POINTS);
    if step == 1 {
        return series;
    }
    let last = series.len() - 1;
    series
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, point)| point)
        .collect()
}
