//! # Swingstat Core
//!
//! How often does a stock move more than X% within N calendar days?
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | History source adapters (Tradier) |
//! | [`analysis`] | Window location and threshold aggregation |
//! | [`data_source`] | History source trait, request and error types |
//! | [`domain`] | Validated domain types (quotes, symbols, dates) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`run`] | Fetch-then-analyze entry point |
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │ TradierAdapter  │────▶│ HTTP Client      │
//! │ (HistorySource) │     │ (reqwest/static) │
//! └────────┬────────┘     └──────────────────┘
//!          │ QuoteSeries
//!          ▼
//! ┌─────────────────┐
//! │ find_window_end │  per start index
//! └────────┬────────┘
//!          │ WindowResult
//!          ▼
//! ┌─────────────────┐
//! │ aggregate       │──▶ MoveSummary
//! └─────────────────┘
//! ```
//!
//! The analysis layer is pure and synchronous: it never performs I/O, and it
//! reports undefined ratios as [`AnalysisError`] values rather than `NaN`.

pub mod adapters;
pub mod analysis;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod run;

pub use adapters::TradierAdapter;

pub use analysis::{
    aggregate, find_window_end, percent_change, windows, AnalysisConfig, MoveSummary,
    WindowResult,
};

pub use data_source::{HistoryRequest, HistorySource, SourceError, SourceErrorKind};

pub use domain::{DailyQuote, QuoteSeries, Symbol, TradingDate};

pub use error::{AnalysisError, CoreError, ValidationError};

pub use http_client::{
    HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
    StaticHttpClient,
};

pub use run::{analyze_history, RunReport};
