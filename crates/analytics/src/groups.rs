//! Grouped breakdowns over closed trades.
//!
//! One generic reducer handles every grouping dimension; each breakdown is
//! just a key-extraction closure plus a presentation order. This replaces
//! the per-chart copies of the same map-reduce that journals tend to
//! accumulate.

use chrono::{Datelike, Timelike};
use core_types::Trade;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Per-group rollup of closed trades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: String,
    pub count: usize,
    pub wins: usize,
    pub losses: usize,
    pub profit_sum: Decimal,
    pub win_rate_pct: f64,
}

impl GroupStats {
    fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            count: 0,
            wins: 0,
            losses: 0,
            profit_sum: Decimal::ZERO,
            win_rate_pct: 0.0,
        }
    }

    fn from_bucket(key: impl Into<String>, bucket: &Bucket) -> Self {
        Self {
            key: key.into(),
            count: bucket.count,
            wins: bucket.wins,
            losses: bucket.losses,
            profit_sum: bucket.profit_sum,
            win_rate_pct: if bucket.count > 0 {
                100.0 * bucket.wins as f64 / bucket.count as f64
            } else {
                0.0
            },
        }
    }
}

/// Raw accumulator used by [`reduce`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Bucket {
    pub count: usize,
    pub wins: usize,
    pub losses: usize,
    pub profit_sum: Decimal,
}

impl Bucket {
    fn add(&mut self, pnl: Decimal) {
        self.count += 1;
        if pnl > Decimal::ZERO {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.profit_sum += pnl;
    }

    pub(crate) fn mean_profit(&self) -> Decimal {
        if self.count == 0 {
            Decimal::ZERO
        } else {
            self.profit_sum / Decimal::from(self.count)
        }
    }
}

/// The generic group-by reducer. Only settled trades participate; a trade
/// whose key extractor returns `None` is excluded from the breakdown, not
/// bucketed under a synthetic key.
pub(crate) fn reduce<K, F>(trades: &[Trade], key_fn: F) -> HashMap<K, Bucket>
where
    K: Eq + Hash,
    F: Fn(&Trade) -> Option<K>,
{
    let mut buckets: HashMap<K, Bucket> = HashMap::new();
    for trade in trades.iter().filter(|t| t.is_settled()) {
        let Some(pnl) = trade.net_profit else { continue };
        let Some(key) = key_fn(trade) else { continue };
        buckets.entry(key).or_default().add(pnl);
    }
    buckets
}

/// String-keyed aggregation, sorted descending by profit sum for
/// presentation. Empty-string keys are treated as undefined.
pub fn aggregate<F>(trades: &[Trade], key_fn: F) -> Vec<GroupStats>
where
    F: Fn(&Trade) -> Option<String>,
{
    let buckets = reduce(trades, |t| key_fn(t).filter(|k| !k.is_empty()));
    let mut groups: Vec<GroupStats> = buckets
        .into_iter()
        .map(|(key, bucket)| GroupStats::from_bucket(key, &bucket))
        .collect();
    groups.sort_by(|a, b| b.profit_sum.cmp(&a.profit_sum));
    groups
}

/// Breakdown by traded symbol.
pub fn by_symbol(trades: &[Trade]) -> Vec<GroupStats> {
    aggregate(trades, |t| Some(t.symbol.clone()))
}

/// Breakdown by strategy name. Trades without one are excluded.
pub fn by_strategy(trades: &[Trade]) -> Vec<GroupStats> {
    aggregate(trades, |t| t.strategy_name.clone())
}

/// Breakdown by the emotion recorded before entering. Trades without one
/// are excluded.
pub fn by_emotion(trades: &[Trade]) -> Vec<GroupStats> {
    aggregate(trades, |t| t.emotion_before.clone())
}

pub const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Breakdown by weekday of `entry_time`. Always returns seven buckets in
/// Monday-first order, including empty ones, so charts get a stable axis.
pub fn by_weekday(trades: &[Trade]) -> Vec<GroupStats> {
    let buckets = reduce(trades, |t| {
        Some(t.entry_time.weekday().num_days_from_monday() as usize)
    });
    WEEKDAY_LABELS
        .iter()
        .enumerate()
        .map(|(day, label)| match buckets.get(&day) {
            Some(bucket) => GroupStats::from_bucket(*label, bucket),
            None => GroupStats::empty(*label),
        })
        .collect()
}

/// A 7×24 grid of mean profit per (weekday, hour-of-entry) cell.
///
/// Rows are Monday-first weekdays, columns hours 0..24. Cells hold the
/// mean rather than the sum so that busy hours do not dominate the heatmap
/// by volume alone; cells with no trades hold zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitHeatmap {
    pub cells: Vec<Vec<Decimal>>,
}

pub fn profit_heatmap(trades: &[Trade]) -> ProfitHeatmap {
    let buckets = reduce(trades, |t| {
        Some((
            t.entry_time.weekday().num_days_from_monday() as usize,
            t.entry_time.hour() as usize,
        ))
    });
    let mut cells = vec![vec![Decimal::ZERO; 24]; 7];
    for ((day, hour), bucket) in buckets {
        cells[day][hour] = bucket.mean_profit();
    }
    ProfitHeatmap { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal_macros::dec;

    #[test]
    fn aggregate_partitions_profit_exactly() {
        let mut eur = fixtures::closed(100, 0);
        eur.symbol = "EURUSD".to_string();
        let mut gbp_win = fixtures::closed(30, 1);
        gbp_win.symbol = "GBPUSD".to_string();
        let mut gbp_loss = fixtures::closed(-50, 2);
        gbp_loss.symbol = "GBPUSD".to_string();

        let groups = by_symbol(&[eur, gbp_win, gbp_loss]);
        assert_eq!(groups.len(), 2);
        // Sorted descending by profit sum.
        assert_eq!(groups[0].key, "EURUSD");
        assert_eq!(groups[0].profit_sum, dec!(100));
        assert_eq!(groups[1].key, "GBPUSD");
        assert_eq!(groups[1].profit_sum, dec!(-20));
        assert_eq!(groups[1].wins, 1);
        assert_eq!(groups[1].losses, 1);
        assert_eq!(groups[1].win_rate_pct, 50.0);

        let total: Decimal = groups.iter().map(|g| g.profit_sum).sum();
        assert_eq!(total, dec!(80));
    }

    #[test]
    fn trades_without_key_are_excluded() {
        let keyed = {
            let mut t = fixtures::closed(10, 0);
            t.strategy_name = Some("breakout".to_string());
            t
        };
        let unkeyed = fixtures::closed(99, 1);
        let groups = by_strategy(&[keyed, unkeyed]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "breakout");
        assert_eq!(groups[0].count, 1);
    }

    #[test]
    fn empty_string_key_counts_as_undefined() {
        let mut t = fixtures::closed(10, 0);
        t.emotion_before = Some(String::new());
        assert!(by_emotion(&[t]).is_empty());
    }

    #[test]
    fn weekday_breakdown_always_has_seven_ordered_buckets() {
        // base_time is a Monday; +24h lands on Tuesday.
        let trades = vec![fixtures::closed(40, 0), fixtures::closed(-10, 24)];
        let groups = by_weekday(&trades);
        assert_eq!(groups.len(), 7);
        assert_eq!(groups[0].key, "Monday");
        assert_eq!(groups[0].profit_sum, dec!(40));
        assert_eq!(groups[1].key, "Tuesday");
        assert_eq!(groups[1].profit_sum, dec!(-10));
        assert!(groups[2..].iter().all(|g| g.count == 0));
        assert_eq!(groups[6].key, "Sunday");
    }

    #[test]
    fn heatmap_holds_mean_profit_per_cell() {
        // Two trades in the same Monday 10:00 cell, one on Tuesday 11:00.
        let trades = vec![
            fixtures::closed(100, 0),
            fixtures::closed(0, 0),
            fixtures::closed(-30, 25),
        ];
        let heatmap = profit_heatmap(&trades);
        assert_eq!(heatmap.cells.len(), 7);
        assert_eq!(heatmap.cells[0].len(), 24);
        assert_eq!(heatmap.cells[0][10], dec!(50));
        assert_eq!(heatmap.cells[1][11], dec!(-30));
        assert_eq!(heatmap.cells[3][9], Decimal::ZERO);
    }

    #[test]
    fn open_trades_never_reach_a_bucket() {
        let groups = by_symbol(&[fixtures::open(0)]);
        assert!(groups.is_empty());
    }
}
