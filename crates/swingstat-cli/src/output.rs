use std::io::{self, Write};

use swingstat_core::RunReport;

use crate::cli::OutputFormat;
use crate::error::CliError;

const BANNER: &str = "************************ Stats *****************************";
const RULE: &str = "************************************************************";

pub fn render(report: &RunReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(report)? + "\n",
        OutputFormat::Json => serde_json::to_string(report)? + "\n",
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(payload.as_bytes())?;
    handle.flush()?;
    Ok(())
}

pub fn format_text(report: &RunReport) -> String {
    let summary = &report.summary;
    let symbol = &report.symbol;
    let threshold = summary.threshold_percent;
    let days = summary.days_out;

    format!(
        "\n{BANNER}\n\n\
         {symbol} Gains more than {threshold} % in any {days} day period {up:.2}% of the time.\n\n\
         {symbol} Drops more than {threshold} % in any {days} day period {down:.2}% of the time.\n\n\
         {RULE}\n\n",
        up = summary.percent_up,
        down = summary.percent_down,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use swingstat_core::{MoveSummary, Symbol, TradingDate};

    fn report(threshold_percent: f64) -> RunReport {
        let day = |value: &str| TradingDate::parse(value).expect("date");
        RunReport {
            symbol: Symbol::parse("AAPL").expect("symbol"),
            start: day("2020-01-01"),
            end: day("2020-12-31"),
            quotes: 253,
            summary: MoveSummary {
                days_out: 30,
                threshold_percent,
                windows: 231,
                gains: 86,
                drops: 41,
                skipped_zero_base: 0,
                percent_up: 86.0 / 231.0 * 100.0,
                percent_down: 41.0 / 231.0 * 100.0,
                first_date: day("2020-01-02"),
                last_date: day("2020-11-30"),
            },
        }
    }

    #[test]
    fn text_report_matches_stats_layout() {
        let expected = "\n\
************************ Stats *****************************\n\
\n\
AAPL Gains more than 4.5 % in any 30 day period 37.23% of the time.\n\
\n\
AAPL Drops more than 4.5 % in any 30 day period 17.75% of the time.\n\
\n\
************************************************************\n\
\n";
        assert_eq!(format_text(&report(4.5)), expected);
    }

    #[test]
    fn whole_thresholds_print_without_decimals() {
        let text = format_text(&report(5.0));
        assert!(text.contains("Gains more than 5 % in any 30 day period"));
    }

    #[test]
    fn json_report_carries_summary_fields() {
        let value = serde_json::to_value(report(4.5)).expect("serialize");
        assert_eq!(value["symbol"], "AAPL");
        assert_eq!(value["summary"]["windows"], 231);
        assert_eq!(value["summary"]["first_date"], "2020-01-02");
    }
}
