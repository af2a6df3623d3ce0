//! # Domain Models
//!
//! Validated types shared by the analysis core and the history adapters.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DailyQuote`] | One session's OHLCV record |
//! | [`QuoteSeries`] | Symbol plus quotes, strictly ascending by date |
//! | [`Symbol`] | Normalized ticker |
//! | [`TradingDate`] | Calendar date, no time or offset |
//!
//! Construction validates every invariant, so analysis code can assume
//! finite non-negative prices and ordered, duplicate-free dates.

mod models;
mod symbol;
mod trading_date;

pub use models::{DailyQuote, QuoteSeries};
pub use symbol::Symbol;
pub use trading_date::TradingDate;
