//! Per-account comparison with relative visual scaling.

use core_types::Trade;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::groups;

/// Visual weight assigned when every account ties on profit, so the chart
/// still renders bars of a defined, non-degenerate size.
const TIED_POSITIVE_SCALE: f64 = 80.0;
const TIED_NEGATIVE_SCALE: f64 = 20.0;

/// One account's rollup plus its position on a shared [0, 100] scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountComparison {
    pub account_id: String,
    pub count: usize,
    pub wins: usize,
    pub losses: usize,
    pub profit_sum: Decimal,
    pub win_rate_pct: f64,
    /// Linear position of this account's profit between the worst (0) and
    /// best (100) account in the set.
    pub scale: f64,
}

/// Groups settled trades by `account_id` (trades without one are
/// excluded) and maps each account's profit linearly onto [0, 100] for
/// side-by-side rendering.
pub fn compare_accounts(trades: &[Trade]) -> Vec<AccountComparison> {
    let grouped = groups::aggregate(trades, |t| t.account_id.clone());
    if grouped.is_empty() {
        return Vec::new();
    }

    let min = grouped
        .iter()
        .map(|g| g.profit_sum)
        .min()
        .unwrap_or(Decimal::ZERO);
    let max = grouped
        .iter()
        .map(|g| g.profit_sum)
        .max()
        .unwrap_or(Decimal::ZERO);
    let span = max - min;

    grouped
        .into_iter()
        .map(|g| {
            let scale = if span.is_zero() {
                // All accounts tied; a fixed weight instead of 0/0.
                if g.profit_sum >= Decimal::ZERO {
                    TIED_POSITIVE_SCALE
                } else {
                    TIED_NEGATIVE_SCALE
                }
            } else {
                ((g.profit_sum - min) / span * Decimal::from(100))
                    .to_f64()
                    .unwrap_or(0.0)
            };
            AccountComparison {
                account_id: g.key,
                count: g.count,
                wins: g.wins,
                losses: g.losses,
                profit_sum: g.profit_sum,
                win_rate_pct: g.win_rate_pct,
                scale,
            }
        })
        .collect()
}
