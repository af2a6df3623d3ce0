//! # Window Analysis
//!
//! How often does a symbol move more than `threshold_percent` within
//! `days_out` calendar days?
//!
//! For every session the forward window is located with
//! [`find_window_end`], the close-to-close percent change is measured, and
//! the share of windows above `+threshold` and below `-threshold` is
//! reported as a [`MoveSummary`].
//!
//! ```rust
//! use swingstat_core::{aggregate, AnalysisConfig, DailyQuote, TradingDate};
//!
//! let quote = |date: &str, close: f64| {
//!     DailyQuote::from_close(TradingDate::parse(date).unwrap(), close).unwrap()
//! };
//! let quotes = vec![
//!     quote("2020-01-01", 100.0),
//!     quote("2020-01-15", 110.0),
//!     quote("2020-02-05", 120.0),
//! ];
//!
//! let config = AnalysisConfig::new(30, 4.5).unwrap();
//! let summary = aggregate(&quotes, &config).unwrap();
//! assert_eq!(summary.windows, 1);
//! assert_eq!(summary.percent_up, 100.0);
//! ```

mod window;

use serde::Serialize;
use tracing::debug;

use crate::{AnalysisError, DailyQuote, TradingDate, ValidationError};

pub use window::{find_window_end, windows, WindowResult};

/// Relative change from `before` to `after`, in percent.
///
/// `percent_change(50.0, 60.0)` is `20.0`. A zero base yields
/// [`AnalysisError::ZeroBase`]; NaN or an infinite base yields
/// [`AnalysisError::NonFiniteBase`].
pub fn percent_change(before: f64, after: f64) -> Result<f64, AnalysisError> {
    if !before.is_finite() {
        return Err(AnalysisError::NonFiniteBase { before });
    }
    if before == 0.0 {
        return Err(AnalysisError::ZeroBase);
    }
    Ok(100.0 * (after - before) / before)
}

/// Parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisConfig {
    days_out: u32,
    threshold_percent: f64,
}

impl AnalysisConfig {
    pub fn new(days_out: u32, threshold_percent: f64) -> Result<Self, ValidationError> {
        if days_out == 0 {
            return Err(ValidationError::InvalidDaysOut);
        }
        if !threshold_percent.is_finite() || threshold_percent <= 0.0 {
            return Err(ValidationError::InvalidThreshold {
                value: threshold_percent,
            });
        }

        Ok(Self {
            days_out,
            threshold_percent,
        })
    }

    pub const fn days_out(&self) -> u32 {
        self.days_out
    }

    pub const fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }
}

/// Aggregate outcome of [`aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveSummary {
    pub days_out: u32,
    pub threshold_percent: f64,
    /// Complete windows with a defined percent change.
    pub windows: usize,
    /// Windows that gained more than the threshold.
    pub gains: usize,
    /// Windows that dropped more than the threshold.
    pub drops: usize,
    /// Windows excluded because the start close was zero.
    pub skipped_zero_base: usize,
    pub percent_up: f64,
    pub percent_down: f64,
    /// Start date of the first counted window.
    pub first_date: TradingDate,
    /// End date of the last counted window.
    pub last_date: TradingDate,
}

/// Share of windows moving beyond `±threshold_percent`.
///
/// Start indices without a complete window are ignored entirely. When no
/// window qualifies (including empty input) the ratio is undefined and
/// [`AnalysisError::NoCompleteWindows`] is returned. A non-finite start close
/// fails the whole run with [`AnalysisError::NonFiniteBase`].
pub fn aggregate(
    quotes: &[DailyQuote],
    config: &AnalysisConfig,
) -> Result<MoveSummary, AnalysisError> {
    let threshold = config.threshold_percent;
    let mut counted = 0_usize;
    let mut gains = 0_usize;
    let mut drops = 0_usize;
    let mut skipped_zero_base = 0_usize;
    let mut span: Option<(TradingDate, TradingDate)> = None;

    for result in windows(quotes, config.days_out) {
        let change = match result.percent_change() {
            Ok(change) => change,
            Err(AnalysisError::ZeroBase) => {
                skipped_zero_base += 1;
                continue;
            }
            Err(error) => return Err(error),
        };

        counted += 1;
        if change > threshold {
            gains += 1;
        } else if change < -threshold {
            drops += 1;
        }

        span = Some(match span {
            None => (result.start_date, result.end_date),
            Some((first, _)) => (first, result.end_date),
        });
    }

    let Some((first_date, last_date)) = span else {
        return Err(AnalysisError::NoCompleteWindows {
            days_out: config.days_out,
            quotes: quotes.len(),
        });
    };

    debug!(
        quotes = quotes.len(),
        windows = counted,
        gains,
        drops,
        skipped_zero_base,
        "aggregated move windows"
    );

    Ok(MoveSummary {
        days_out: config.days_out,
        threshold_percent: threshold,
        windows: counted,
        gains,
        drops,
        skipped_zero_base,
        percent_up: share(gains, counted),
        percent_down: share(drops, counted),
        first_date,
        last_date,
    })
}

fn share(count: usize, total: usize) -> f64 {
    count as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(date: &str, close: f64) -> DailyQuote {
        DailyQuote::from_close(TradingDate::parse(date).expect("date"), close).expect("quote")
    }

    fn config(days_out: u32, threshold: f64) -> AnalysisConfig {
        AnalysisConfig::new(days_out, threshold).expect("valid config")
    }

    #[test]
    fn percent_change_follows_formula() {
        assert_eq!(percent_change(50.0, 60.0).expect("defined"), 20.0);
        let down = percent_change(60.0, 50.0).expect("defined");
        assert!((down - (-16.666_666_666_666_668)).abs() < 1e-12);
        for before in [0.01, 1.0, 42.5, 10_000.0] {
            assert_eq!(percent_change(before, before).expect("defined"), 0.0);
        }
    }

    #[test]
    fn percent_change_rejects_zero_base() {
        assert_eq!(percent_change(0.0, 5.0), Err(AnalysisError::ZeroBase));
        assert_eq!(percent_change(-0.0, 5.0), Err(AnalysisError::ZeroBase));
    }

    #[test]
    fn percent_change_reports_non_finite_base_separately() {
        for before in [f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                percent_change(before, 5.0),
                Err(AnalysisError::NonFiniteBase { before })
            );
        }
        let err = percent_change(f64::NAN, 5.0).expect_err("undefined");
        assert!(matches!(err, AnalysisError::NonFiniteBase { before } if before.is_nan()));
        assert!(err.to_string().contains("non-finite"));
    }

    #[test]
    fn config_rejects_zero_days_and_bad_thresholds() {
        assert_eq!(
            AnalysisConfig::new(0, 4.5),
            Err(ValidationError::InvalidDaysOut)
        );
        for value in [0.0, -1.0] {
            assert_eq!(
                AnalysisConfig::new(30, value),
                Err(ValidationError::InvalidThreshold { value })
            );
        }
        assert!(AnalysisConfig::new(30, f64::INFINITY).is_err());
    }

    #[test]
    fn empty_input_has_no_complete_windows() {
        let err = aggregate(&[], &config(30, 4.5)).expect_err("undefined ratio");
        assert_eq!(
            err,
            AnalysisError::NoCompleteWindows {
                days_out: 30,
                quotes: 0
            }
        );
    }

    #[test]
    fn threshold_is_exclusive_in_both_directions() {
        let quotes = vec![
            quote("2020-01-01", 100.0),
            quote("2020-01-02", 105.0),
            quote("2020-01-03", 99.75),
            quote("2020-01-04", 100.0),
            quote("2020-01-05", 100.0),
        ];
        // Changes: +5.0, -5.0, +0.2506...; the last start has no later session.
        let summary = aggregate(&quotes, &config(1, 5.0)).expect("windows");
        assert_eq!(summary.windows, 3);
        assert_eq!(summary.gains, 0);
        assert_eq!(summary.drops, 0);

        let summary = aggregate(&quotes, &config(1, 4.99)).expect("windows");
        assert_eq!((summary.gains, summary.drops), (1, 1));
    }

    #[test]
    fn zero_close_windows_are_excluded() {
        let quotes = vec![
            quote("2020-01-01", 0.0),
            quote("2020-01-02", 10.0),
            quote("2020-01-03", 12.0),
            quote("2020-01-04", 12.0),
            quote("2020-01-05", 12.0),
        ];
        let summary = aggregate(&quotes, &config(1, 10.0)).expect("windows");
        assert_eq!(summary.skipped_zero_base, 1);
        assert_eq!(summary.windows, 2);
        assert_eq!(summary.percent_up, 50.0);
        assert_eq!(summary.first_date.to_string(), "2020-01-02");
        assert_eq!(summary.last_date.to_string(), "2020-01-04");
    }

    #[test]
    fn non_finite_start_close_fails_instead_of_skipping() {
        let mut quotes = vec![
            quote("2020-01-01", 10.0),
            quote("2020-01-02", 10.0),
            quote("2020-01-03", 10.0),
        ];
        quotes[0].close = f64::INFINITY;

        let err = aggregate(&quotes, &config(1, 1.0)).expect_err("non-finite base");
        assert_eq!(
            err,
            AnalysisError::NonFiniteBase {
                before: f64::INFINITY
            }
        );
    }

    #[test]
    fn only_zero_close_windows_is_undefined() {
        let quotes = vec![
            quote("2020-01-01", 0.0),
            quote("2020-01-02", 1.0),
            quote("2020-01-03", 1.0),
        ];
        // The only complete window starts on the zero close.
        let err = aggregate(&quotes, &config(1, 0.5)).expect_err("undefined");
        assert!(matches!(err, AnalysisError::NoCompleteWindows { quotes: 3, .. }));
    }
}
