//! # Tradelog Analytics Engine
//!
//! This crate turns a raw collection of journaled trades into derived
//! statistics and chart-ready series. It is the "unbiased judge" of the
//! journal: every number on an analytics view comes from here.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every entry point is a pure function of its
//!   input. Identical trade collections always yield identical output,
//!   which makes results safe to cache and trivial to test. Nothing here
//!   performs I/O, holds state, or mutates a trade.
//!
//! ## Public API
//!
//! - `StatisticsEngine`: the top-level summary calculator.
//! - `TradeStatistics` / `SeriesPoint`: the output value types.
//! - `window::filter_window`: relative time-window filtering.
//! - `curve::build_equity_curve`: cumulative profit curve plus drawdown.
//! - `rolling::rolling_win_rate`: trailing-window win-rate trend.
//! - `groups` / `accounts`: grouped breakdowns and account comparison.

// Declare the modules that constitute this crate.
pub mod accounts;
pub mod curve;
pub mod engine;
pub mod groups;
pub mod report;
pub mod rolling;
pub mod window;

// Re-export the key components to create a clean, public-facing API.
pub use engine::StatisticsEngine;
pub use report::{SeriesPoint, TradeStatistics};

#[cfg(test)]
pub(crate) mod fixtures;
