//! Forward window location over an ordered quote slice.
//!
//! A window starts at a quote and ends at the latest quote whose date is no
//! later than `start + days_out` calendar days. The window only counts as
//! complete when the data continues *past* that target date; otherwise the
//! history may simply be truncated and the start index is dropped.
//!
//! Known boundary behavior: when the session right after the start is already
//! beyond the target, the window ends on the start quote itself and its
//! difference is zero. Such windows are kept and counted.

use serde::Serialize;

use crate::{AnalysisError, DailyQuote, TradingDate};

use super::percent_change;

/// Index of the quote that closes the window opened at `start_index`.
///
/// Returns `None` when `start_index` is out of bounds, when no quote lies
/// strictly after the target date, or when the target date overflows.
///
/// `quotes` must be strictly ascending by date, as guaranteed by
/// [`QuoteSeries`](crate::QuoteSeries).
pub fn find_window_end(quotes: &[DailyQuote], start_index: usize, days_out: u32) -> Option<usize> {
    let start = quotes.get(start_index)?;
    let target = start.date.plus_days(days_out)?;

    // Dates are sorted, so "still inside the window" is a prefix of the tail.
    let inside = quotes[start_index..].partition_point(|quote| quote.date <= target);
    let end_index = start_index + inside - 1;

    if end_index + 1 == quotes.len() {
        // Never saw a session past the target.
        return None;
    }

    Some(end_index)
}

/// One complete window, measured close to close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowResult {
    pub start_date: TradingDate,
    pub end_date: TradingDate,
    pub start_value: f64,
    pub end_value: f64,
    pub difference: f64,
}

impl WindowResult {
    pub fn between(start: &DailyQuote, end: &DailyQuote) -> Self {
        Self {
            start_date: start.date,
            end_date: end.date,
            start_value: start.close,
            end_value: end.close,
            difference: end.close - start.close,
        }
    }

    pub fn percent_change(&self) -> Result<f64, AnalysisError> {
        percent_change(self.start_value, self.end_value)
    }
}

/// Every complete window in `quotes`, in start-date order.
pub fn windows(quotes: &[DailyQuote], days_out: u32) -> impl Iterator<Item = WindowResult> + '_ {
    (0..quotes.len()).filter_map(move |start_index| {
        find_window_end(quotes, start_index, days_out)
            .map(|end_index| WindowResult::between(&quotes[start_index], &quotes[end_index]))
    })
}
