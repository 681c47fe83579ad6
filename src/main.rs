use analytics::{accounts, curve, groups, rolling, window, StatisticsEngine, TradeStatistics};
use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use core_types::{TimePeriod, Trade};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// The main entry point for the tradelog journal analytics CLI.
///
/// The binary owns every ambient concern the analytics engine refuses to:
/// reading the journal file, picking the time window, and rendering the
/// results. The engine itself stays a pure function of the trade list.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut trades = load_journal(&cli.input)?;
    if let Some(period) = cli.period {
        trades = window::filter_window(&trades, period.into(), Utc::now());
        tracing::info!(count = trades.len(), ?period, "applied time window");
    }

    match cli.command {
        Commands::Summary => print_summary(&trades, cli.json)?,
        Commands::Curve => print_curve(&trades, cli.period, cli.json)?,
        Commands::Rolling => print_rolling(&trades, cli.json)?,
        Commands::Accounts => print_accounts(&trades, cli.json)?,
        Commands::Breakdown(args) => print_breakdown(&trades, args.by, cli.json)?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Analytics over a personal trading journal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the journal file (a JSON array of trade records).
    #[arg(long, global = true, default_value = "trades.json")]
    input: PathBuf,

    /// Restrict the analysis to a relative time window.
    #[arg(long, global = true, value_enum)]
    period: Option<PeriodArg>,

    /// Emit the raw JSON payload instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary statistics for the journal.
    Summary,
    /// Print the cumulative-profit (equity) curve.
    Curve,
    /// Print the rolling win-rate trend.
    Rolling,
    /// Compare performance across trading accounts.
    Accounts,
    /// Print a grouped breakdown of the journal.
    Breakdown(BreakdownArgs),
}

#[derive(Parser)]
struct BreakdownArgs {
    /// The dimension to group trades by.
    #[arg(long, value_enum)]
    by: Dimension,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeriodArg {
    Day,
    Week,
    Month,
    Year,
}

impl From<PeriodArg> for TimePeriod {
    fn from(value: PeriodArg) -> Self {
        match value {
            PeriodArg::Day => TimePeriod::Day,
            PeriodArg::Week => TimePeriod::Week,
            PeriodArg::Month => TimePeriod::Month,
            PeriodArg::Year => TimePeriod::Year,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Dimension {
    Symbol,
    Strategy,
    Weekday,
    Emotion,
}

// ==============================================================================
// Journal Loading
// ==============================================================================

/// Reads and validates the journal. Malformed records are skipped with a
/// warning rather than failing the whole run; the analytics layer assumes
/// field presence follows `status`, and this is where that gets enforced.
fn load_journal(path: &Path) -> anyhow::Result<Vec<Trade>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading journal file {}", path.display()))?;
    let records: Vec<Trade> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing journal file {}", path.display()))?;

    let mut trades = Vec::with_capacity(records.len());
    for record in records {
        match record.validate() {
            Ok(()) => trades.push(record),
            Err(e) => tracing::warn!("skipping malformed journal record: {e}"),
        }
    }
    tracing::info!(count = trades.len(), "journal loaded");
    Ok(trades)
}

// ==============================================================================
// Rendering
// ==============================================================================

fn print_summary(trades: &[Trade], json: bool) -> anyhow::Result<()> {
    let stats = StatisticsEngine::new().compute(trades);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total trades", &stats.total_trades.to_string()]);
    table.add_row(vec!["Winning trades", &stats.winning_trades.to_string()]);
    table.add_row(vec!["Losing trades", &stats.losing_trades.to_string()]);
    table.add_row(vec!["Win rate", &format!("{:.1}%", stats.win_rate_pct)]);
    table.add_row(vec!["Total profit", &stats.total_profit.to_string()]);
    table.add_row(vec!["Total loss", &stats.total_loss.to_string()]);
    table.add_row(vec!["Net profit", &stats.net_profit.to_string()]);
    table.add_row(vec!["Average win", &format!("{:.2}", stats.average_win)]);
    table.add_row(vec!["Average loss", &format!("{:.2}", stats.average_loss)]);
    table.add_row(vec!["Profit factor", &format_profit_factor(&stats)]);
    table.add_row(vec!["Largest win", &stats.largest_win.to_string()]);
    table.add_row(vec!["Largest loss", &stats.largest_loss.to_string()]);
    table.add_row(vec!["Max drawdown", &stats.max_drawdown.to_string()]);
    table.add_row(vec![
        "Avg duration (min)",
        &format!("{:.0}", stats.average_trade_duration_mins),
    ]);
    table.add_row(vec!["Best day", &stats.best_day.to_string()]);
    table.add_row(vec!["Worst day", &stats.worst_day.to_string()]);
    println!("{table}");
    Ok(())
}

fn format_profit_factor(stats: &TradeStatistics) -> String {
    if stats.profit_factor.is_infinite() {
        "∞".to_string()
    } else {
        format!("{:.2}", stats.profit_factor)
    }
}

fn print_curve(trades: &[Trade], period: Option<PeriodArg>, json: bool) -> anyhow::Result<()> {
    let granularity = period.map_or(TimePeriod::Month, TimePeriod::from);
    let equity = curve::build_equity_curve(trades, granularity);
    if json {
        println!("{}", serde_json::to_string_pretty(&equity)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Time", "Cumulative profit"]);
    for point in &equity.points {
        table.add_row(vec![&point.label, &format!("{:.2}", point.value)]);
    }
    println!("{table}");
    println!("Max drawdown: {}", equity.max_drawdown);
    Ok(())
}

fn print_rolling(trades: &[Trade], json: bool) -> anyhow::Result<()> {
    let series = rolling::rolling_win_rate(trades);
    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Until", "Win rate", "Window"]);
    for point in &series {
        table.add_row(vec![
            &point.label,
            &format!("{:.1}%", point.value),
            &point.count.unwrap_or(0).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn print_accounts(trades: &[Trade], json: bool) -> anyhow::Result<()> {
    let comparison = accounts::compare_accounts(trades);
    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Account", "Trades", "Win rate", "Profit", "Scale"]);
    for account in &comparison {
        table.add_row(vec![
            &account.account_id,
            &account.count.to_string(),
            &format!("{:.1}%", account.win_rate_pct),
            &account.profit_sum.to_string(),
            &format!("{:.0}", account.scale),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn print_breakdown(trades: &[Trade], by: Dimension, json: bool) -> anyhow::Result<()> {
    let grouped = match by {
        Dimension::Symbol => groups::by_symbol(trades),
        Dimension::Strategy => groups::by_strategy(trades),
        Dimension::Weekday => groups::by_weekday(trades),
        Dimension::Emotion => groups::by_emotion(trades),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&grouped)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Group", "Trades", "Wins", "Losses", "Win rate", "Profit"]);
    for group in &grouped {
        table.add_row(vec![
            &group.key,
            &group.count.to_string(),
            &group.wins.to_string(),
            &group.losses.to_string(),
            &format!("{:.1}%", group.win_rate_pct),
            &group.profit_sum.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
