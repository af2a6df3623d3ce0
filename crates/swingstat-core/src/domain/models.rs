use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisConfig, MoveSummary};
use crate::{AnalysisError, Symbol, TradingDate, ValidationError};

/// One trading session's OHLCV record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub date: TradingDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyQuote {
    pub fn new(
        date: TradingDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Quote where only the close matters; open/high/low mirror it.
    pub fn from_close(date: TradingDate, close: f64) -> Result<Self, ValidationError> {
        Self::new(date, close, close, close, close, 0)
    }
}

/// Daily history for one symbol, strictly ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSeries {
    symbol: Symbol,
    quotes: Vec<DailyQuote>,
}

impl QuoteSeries {
    /// Wrap `quotes`, rejecting duplicate or out-of-order dates.
    ///
    /// Gaps between dates (weekends, holidays) are fine.
    pub fn new(symbol: Symbol, quotes: Vec<DailyQuote>) -> Result<Self, ValidationError> {
        if let Some(index) = quotes
            .windows(2)
            .position(|pair| pair[1].date <= pair[0].date)
        {
            return Err(ValidationError::UnorderedQuotes { index: index + 1 });
        }

        Ok(Self { symbol, quotes })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn quotes(&self) -> &[DailyQuote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn into_quotes(self) -> Vec<DailyQuote> {
        self.quotes
    }

    /// Run the threshold-crossing analysis over this series.
    pub fn analyze(&self, config: &AnalysisConfig) -> Result<MoveSummary, AnalysisError> {
        analysis::aggregate(&self.quotes, config)
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
