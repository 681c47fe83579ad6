use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A comprehensive, standardized summary of journaled trading performance.
///
/// This struct is the final output of the `StatisticsEngine` and serves as
/// the data transfer object for analytics results throughout the system.
/// It is fully recomputed on every call; there is no identity or lifecycle
/// beyond "returned by a call".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStatistics {
    // I. Trade Counts
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    /// Percentage in [0, 100]. Zero-profit trades count against it.
    pub win_rate_pct: f64,

    // II. Profit and Loss
    /// Sum of positive net profits (gross profit).
    pub total_profit: Decimal,
    /// Sum of the magnitudes of negative net profits (gross loss).
    pub total_loss: Decimal,
    /// Exactly `total_profit - total_loss`.
    pub net_profit: Decimal,
    pub average_win: Decimal,
    pub average_loss: Decimal,
    /// Gross profit over gross loss. `f64::INFINITY` when there are wins
    /// but no losses; 0 for an all-zero or empty set. An f64 rather than a
    /// Decimal because downstream presentation relies on the literal
    /// infinity sentinel.
    pub profit_factor: f64,

    // III. Extremes and Risk
    pub largest_win: Decimal,
    /// The most negative net profit, as a signed value (not a magnitude).
    pub largest_loss: Decimal,
    /// Maximum peak-to-trough decline of the cumulative profit curve.
    pub max_drawdown: Decimal,

    // IV. Time-Based
    /// Mean of `duration_minutes` over the closed trades that carry it.
    pub average_trade_duration_mins: f64,
    /// Best single calendar day's summed net profit.
    pub best_day: Decimal,
    /// Worst single calendar day's summed net profit.
    pub worst_day: Decimal,
}

impl TradeStatistics {
    /// Creates a new, zeroed-out TradeStatistics.
    ///
    /// This doubles as the defined result for an empty input set: every
    /// numeric field 0, and `profit_factor` 0 rather than NaN or infinity.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            win_rate_pct: 0.0,
            total_profit: Decimal::ZERO,
            total_loss: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            average_win: Decimal::ZERO,
            average_loss: Decimal::ZERO,
            profit_factor: 0.0,
            largest_win: Decimal::ZERO,
            largest_loss: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
            average_trade_duration_mins: 0.0,
            best_day: Decimal::ZERO,
            worst_day: Decimal::ZERO,
        }
    }
}

impl Default for TradeStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// One point of a chart-ready series: an axis label plus a value, with
/// optional per-point metadata. A lightweight tuple, not a persisted
/// entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_rate_pct: Option<f64>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            count: None,
            win_rate_pct: None,
        }
    }
}
