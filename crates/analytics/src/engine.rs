use chrono::NaiveDate;
use core_types::Trade;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::curve;
use crate::report::TradeStatistics;

/// A stateless calculator for deriving summary statistics from a journal's
/// trade collection.
#[derive(Debug, Default)]
pub struct StatisticsEngine {}

impl StatisticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for computing summary statistics.
    ///
    /// Only closed trades that carry a `net_profit` contribute; everything
    /// else is filtered out, never coerced to zero. An empty effective
    /// input returns the all-zero statistics record (with `profit_factor`
    /// 0, not NaN or infinity). This function never fails, whatever the
    /// input shape.
    pub fn compute(&self, trades: &[Trade]) -> TradeStatistics {
        let mut stats = TradeStatistics::new();

        let closed: Vec<(&Trade, Decimal)> = trades
            .iter()
            .filter(|t| t.is_settled())
            .filter_map(|t| t.net_profit.map(|pnl| (t, pnl)))
            .collect();

        if closed.is_empty() {
            return stats;
        }

        self.accumulate_profitability(&closed, &mut stats);
        stats.max_drawdown = curve::max_drawdown(trades);
        self.accumulate_time_metrics(&closed, &mut stats);

        tracing::debug!(
            total = stats.total_trades,
            wins = stats.winning_trades,
            losses = stats.losing_trades,
            net_profit = %stats.net_profit,
            "computed journal statistics"
        );

        stats
    }

    /// Counts, sums and ratio metrics over the win/loss partition.
    ///
    /// A zero-profit trade falls on the loss side of the partition (it did
    /// not win), but contributes nothing to either sum.
    fn accumulate_profitability(&self, closed: &[(&Trade, Decimal)], stats: &mut TradeStatistics) {
        stats.total_trades = closed.len();

        for &(_, pnl) in closed {
            if pnl > Decimal::ZERO {
                stats.winning_trades += 1;
                stats.total_profit += pnl;
                if pnl > stats.largest_win {
                    stats.largest_win = pnl;
                }
            } else {
                stats.losing_trades += 1;
                stats.total_loss += pnl.abs();
                if pnl < stats.largest_loss {
                    stats.largest_loss = pnl;
                }
            }
        }

        stats.net_profit = stats.total_profit - stats.total_loss;
        stats.win_rate_pct = 100.0 * stats.winning_trades as f64 / stats.total_trades as f64;

        if stats.winning_trades > 0 {
            stats.average_win = stats.total_profit / Decimal::from(stats.winning_trades);
        }
        if stats.losing_trades > 0 {
            stats.average_loss = stats.total_loss / Decimal::from(stats.losing_trades);
        }

        // An all-winning set reports the literal infinity sentinel; an
        // all-zero set reports 0.
        stats.profit_factor = if stats.total_loss > Decimal::ZERO {
            (stats.total_profit / stats.total_loss)
                .to_f64()
                .unwrap_or(0.0)
        } else if stats.total_profit > Decimal::ZERO {
            f64::INFINITY
        } else {
            0.0
        };
    }

    /// Duration mean and best/worst calendar day.
    fn accumulate_time_metrics(&self, closed: &[(&Trade, Decimal)], stats: &mut TradeStatistics) {
        // Mean over the trades that carry a precomputed duration; trades
        // without one are skipped, not derived from their timestamps.
        let durations: Vec<i64> = closed
            .iter()
            .filter_map(|(t, _)| t.duration_minutes)
            .collect();
        if !durations.is_empty() {
            stats.average_trade_duration_mins =
                durations.iter().sum::<i64>() as f64 / durations.len() as f64;
        }

        let mut daily: HashMap<NaiveDate, Decimal> = HashMap::new();
        for &(trade, pnl) in closed {
            *daily
                .entry(trade.entry_time.date_naive())
                .or_insert(Decimal::ZERO) += pnl;
        }
        stats.best_day = daily.values().copied().max().unwrap_or(Decimal::ZERO);
        stats.worst_day = daily.values().copied().min().unwrap_or(Decimal::ZERO);
    }
}
