//! One-shot fetch-then-analyze entry point.

use serde::Serialize;
use tracing::info;

use crate::data_source::{HistoryRequest, HistorySource};
use crate::{AnalysisConfig, CoreError, MoveSummary, Symbol, TradingDate};

/// Everything a report needs about one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub symbol: Symbol,
    pub start: TradingDate,
    pub end: TradingDate,
    pub quotes: usize,
    pub summary: MoveSummary,
}

/// Fetch the history once and analyze it. Any failure aborts the run.
pub async fn analyze_history(
    source: &dyn HistorySource,
    request: &HistoryRequest,
    config: &AnalysisConfig,
) -> Result<RunReport, CoreError> {
    let series = source.daily_history(request).await?;
    info!(
        source = source.name(),
        symbol = %series.symbol(),
        quotes = series.len(),
        "history loaded"
    );

    let summary = series.analyze(config)?;

    Ok(RunReport {
        symbol: request.symbol().clone(),
        start: request.start(),
        end: request.end(),
        quotes: series.len(),
        summary,
    })
}
