//! History source contract and request/error types.
//!
//! A [`HistorySource`] turns a [`HistoryRequest`] into a validated
//! [`QuoteSeries`]. Any failure is a [`SourceError`]; callers are expected to
//! abort the run rather than analyze partial data.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{QuoteSeries, Symbol, TradingDate, ValidationError};

/// Boxed future returned by [`HistorySource::daily_history`].
pub type HistoryFuture<'a> = Pin<Box<dyn Future<Output = Result<QuoteSeries, SourceError>> + Send + 'a>>;

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Unavailable,
    Unauthorized,
    InvalidRequest,
    NoData,
    Internal,
}

/// Structured source error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unavailable, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Unauthorized, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::InvalidRequest, message)
    }

    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NoData, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::Internal, message)
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::Unauthorized => "source.unauthorized",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::NoData => "source.no_data",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Daily history for `symbol` over the inclusive range `start..=end`.
///
/// Only [`HistoryRequest::new`] builds one, so `start <= end` always holds:
///
/// ```compile_fail
/// use swingstat_core::{HistoryRequest, Symbol, TradingDate};
///
/// let inverted = HistoryRequest {
///     symbol: Symbol::parse("SPY").unwrap(),
///     start: TradingDate::parse("2021-01-02").unwrap(),
///     end: TradingDate::parse("2021-01-01").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    symbol: Symbol,
    start: TradingDate,
    end: TradingDate,
}

impl HistoryRequest {
    pub fn new(symbol: Symbol, start: TradingDate, end: TradingDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { symbol, start, end })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub const fn start(&self) -> TradingDate {
        self.start
    }

    pub const fn end(&self) -> TradingDate {
        self.end
    }
}

/// Source of daily quote history.
///
/// Implementations return quotes sorted ascending by date.
pub trait HistorySource: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the full daily history for the request.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, a non-success status,
    /// an empty result, or a body that cannot be parsed into valid quotes.
    fn daily_history<'a>(&'a self, req: &'a HistoryRequest) -> HistoryFuture<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: &str) -> TradingDate {
        TradingDate::parse(value).expect("date")
    }

    #[test]
    fn request_rejects_inverted_range() {
        let symbol = Symbol::parse("SPY").expect("symbol");
        let err = HistoryRequest::new(symbol, day("2021-01-02"), day("2021-01-01"))
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDateRange { .. }));
    }

    #[test]
    fn single_day_range_is_valid() {
        let symbol = Symbol::parse("SPY").expect("symbol");
        let req = HistoryRequest::new(symbol, day("2021-01-01"), day("2021-01-01"))
            .expect("valid request");
        assert_eq!(req.symbol().as_str(), "SPY");
        assert_eq!(req.start(), req.end());
    }

    #[test]
    fn error_display_includes_code() {
        let error = SourceError::no_data("no data returned");
        assert_eq!(error.to_string(), "no data returned (source.no_data)");
        assert_eq!(error.kind(), SourceErrorKind::NoData);
    }
}
