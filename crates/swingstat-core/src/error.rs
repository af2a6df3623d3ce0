use thiserror::Error;

use crate::data_source::SourceError;

/// Validation and contract errors exposed by `swingstat-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("quotes must be strictly ascending by date; violation at index {index}")]
    UnorderedQuotes { index: usize },

    #[error("days out must be greater than zero")]
    InvalidDaysOut,
    #[error("threshold percent must be finite and greater than zero: {value}")]
    InvalidThreshold { value: f64 },
}

/// Failures of the window analysis itself.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("percent change is undefined for a zero base value")]
    ZeroBase,
    #[error("percent change is undefined for non-finite base value {before}")]
    NonFiniteBase { before: f64 },

    #[error("no complete {days_out}-day window in {quotes} quote(s)")]
    NoCompleteWindows { days_out: u32, quotes: usize },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
