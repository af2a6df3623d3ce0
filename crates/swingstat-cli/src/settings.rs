//! Turns parsed flags into the explicit run configuration.

use std::fmt;

use swingstat_core::{AnalysisConfig, HistoryRequest, TradierAdapter, TradingDate};
use time::OffsetDateTime;

use crate::cli::Cli;
use crate::error::CliError;

/// Everything one run needs; built once from the command line.
#[derive(Clone)]
pub struct RunSettings {
    pub request: HistoryRequest,
    pub analysis: AnalysisConfig,
    pub api_key: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl RunSettings {
    pub fn from_cli(cli: &Cli, today: TradingDate) -> Result<Self, CliError> {
        let end = cli.end.unwrap_or(today);
        let request = HistoryRequest::new(cli.symbol.clone(), cli.start, end)?;
        let analysis = AnalysisConfig::new(cli.days, cli.percent_away)?;

        Ok(Self {
            request,
            analysis,
            api_key: cli.key.clone(),
            base_url: cli.base_url.clone(),
            timeout_ms: cli.timeout_ms,
        })
    }

    pub fn adapter(&self) -> TradierAdapter {
        TradierAdapter::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout_ms(self.timeout_ms)
    }
}

impl fmt::Debug for RunSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunSettings")
            .field("request", &self.request)
            .field("analysis", &self.analysis)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Today's date in the local timezone, or UTC when the offset is unknown.
pub fn local_today() -> TradingDate {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
        .into()
}
