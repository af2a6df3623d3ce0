//! CLI argument definitions for swingstat.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--symbol` | required | Ticker to analyze |
//! | `--key` | `$TRADIER_API_KEY` | Tradier API key |
//! | `--start` | `1980-01-01` | First history date |
//! | `--end` | today | Last history date |
//! | `--days` | `30` | Window width in calendar days |
//! | `--percent-away` | `4.5` | Move threshold in percent |
//! | `--format` | `text` | Report format (text, json) |
//!
//! # Examples
//!
//! ```bash
//! swingstat --symbol SPY
//! swingstat --symbol AAPL --days 10 --percent-away 3 --start 2015-01-01
//! swingstat --symbol QQQ --format json --pretty
//! ```

use clap::{ArgAction, Parser, ValueEnum};
use swingstat_core::adapters::{TRADIER_API_KEY_ENV, TRADIER_BASE_URL};
use swingstat_core::{Symbol, TradingDate};

/// How often does a stock move more than X% within N days?
///
/// Fetches daily history from Tradier and reports the share of N-day
/// windows whose close-to-close change exceeds the threshold, up and down.
#[derive(Debug, Parser)]
#[command(name = "swingstat", author, version, about)]
pub struct Cli {
    /// Ticker symbol (e.g. SPY, AAPL, BRK.B).
    #[arg(long)]
    pub symbol: Symbol,

    /// Tradier API key.
    #[arg(long, env = TRADIER_API_KEY_ENV, hide_env_values = true)]
    pub key: String,

    /// First date of history to fetch (YYYY-MM-DD).
    #[arg(long, default_value = "1980-01-01")]
    pub start: TradingDate,

    /// Last date of history to fetch (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub end: Option<TradingDate>,

    /// Window width in calendar days.
    #[arg(long, default_value_t = 30)]
    pub days: u32,

    /// Percent move, up or down, that a window must exceed to count.
    #[arg(long, alias = "percent_away", default_value_t = 4.5)]
    pub percent_away: f64,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// API base URL, e.g. https://sandbox.tradier.com/v1 for sandbox keys.
    #[arg(long, default_value = TRADIER_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// Single JSON object.
    Json,
}
