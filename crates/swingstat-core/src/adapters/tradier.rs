use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::data_source::{HistoryFuture, HistoryRequest, HistorySource, SourceError};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::{DailyQuote, QuoteSeries, TradingDate};

pub const TRADIER_BASE_URL: &str = "https://api.tradier.com/v1";
pub const TRADIER_SANDBOX_URL: &str = "https://sandbox.tradier.com/v1";
pub const TRADIER_API_KEY_ENV: &str = "TRADIER_API_KEY";

/// Daily history from Tradier's `/markets/history` endpoint.
#[derive(Clone)]
pub struct TradierAdapter {
    http_client: Arc<dyn HttpClient>,
    auth: HttpAuth,
    base_url: String,
    timeout_ms: u64,
}

impl TradierAdapter {
    /// Adapter against the production API using reqwest.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), api_key)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            auth: HttpAuth::BearerToken(api_key.into()),
            base_url: String::from(TRADIER_BASE_URL),
            timeout_ms: 10_000,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn history_url(&self, req: &HistoryRequest) -> String {
        format!(
            "{}/markets/history?symbol={}&start={}&end={}&interval=daily",
            self.base_url,
            urlencoding::encode(req.symbol().as_str()),
            req.start(),
            req.end()
        )
    }

    async fn fetch_history(&self, req: &HistoryRequest) -> Result<QuoteSeries, SourceError> {
        info!(
            source = self.name(),
            symbol = %req.symbol(),
            start = %req.start(),
            end = %req.end(),
            "fetching daily history"
        );

        let request = HttpRequest::get(self.history_url(req))
            .with_header("Accept", "application/json")
            .with_auth(&self.auth)
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| SourceError::unavailable(format!("tradier transport error: {}", e.message())))?;

        debug!(status = response.status, bytes = response.body.len(), "history response");
        check_status(&response)?;

        let days = parse_history(&response.body)?;
        let quotes = days
            .into_iter()
            .map(TradierDay::into_quote)
            .collect::<Result<Vec<_>, _>>()?;

        QuoteSeries::new(req.symbol().clone(), quotes)
            .map_err(|e| SourceError::internal(format!("tradier history is not usable: {e}")))
    }
}

impl HistorySource for TradierAdapter {
    fn name(&self) -> &'static str {
        "tradier"
    }

    fn daily_history<'a>(&'a self, req: &'a HistoryRequest) -> HistoryFuture<'a> {
        Box::pin(self.fetch_history(req))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), SourceError> {
    if response.is_success() {
        return Ok(());
    }

    let message = format!(
        "tradier returned status {} for /markets/history",
        response.status
    );
    Err(match response.status {
        401 | 403 => SourceError::unauthorized(message),
        400 | 404 | 422 => SourceError::invalid_request(message),
        _ => SourceError::unavailable(message),
    })
}

fn parse_history(body: &str) -> Result<Vec<TradierDay>, SourceError> {
    let parsed: TradierHistoryResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse tradier history: {e}")))?;

    match parsed.history.and_then(|history| history.day) {
        Some(OneOrMany::Many(days)) if !days.is_empty() => Ok(days),
        Some(OneOrMany::One(day)) => Ok(vec![day]),
        _ => Err(SourceError::no_data("no data returned from the tradier api")),
    }
}

#[derive(Debug, Deserialize)]
struct TradierHistoryResponse {
    history: Option<TradierHistory>,
}

#[derive(Debug, Deserialize)]
struct TradierHistory {
    day: Option<OneOrMany<TradierDay>>,
}

/// Tradier collapses single-element arrays into a bare object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Debug, Deserialize)]
struct TradierDay {
    date: TradingDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: u64,
}

impl TradierDay {
    fn into_quote(self) -> Result<DailyQuote, SourceError> {
        let date = self.date;
        DailyQuote::new(date, self.open, self.high, self.low, self.close, self.volume)
            .map_err(|e| SourceError::internal(format!("invalid quote for {date}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceErrorKind;
    use crate::http_client::{HttpError, StaticHttpClient};
    use crate::Symbol;

    const TWO_DAYS: &str = r#"{"history":{"day":[
        {"date":"2020-01-02","open":74.06,"high":75.15,"low":73.7975,"close":75.0875,"volume":135647456},
        {"date":"2020-01-03","open":74.2875,"high":75.145,"low":74.125,"close":74.3575,"volume":146535512}
    ]}}"#;

    fn request() -> HistoryRequest {
        HistoryRequest::new(
            Symbol::parse("aapl").expect("symbol"),
            TradingDate::parse("2020-01-01").expect("date"),
            TradingDate::parse("2020-01-31").expect("date"),
        )
        .expect("request")
    }

    fn adapter(client: Arc<StaticHttpClient>) -> TradierAdapter {
        TradierAdapter::with_http_client(client, "tradier-key")
    }

    #[tokio::test]
    async fn sends_bearer_key_and_daily_query() {
        let client = Arc::new(StaticHttpClient::respond(HttpResponse::ok_json(TWO_DAYS)));
        adapter(client.clone())
            .daily_history(&request())
            .await
            .expect("history");

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://api.tradier.com/v1/markets/history?symbol=AAPL&start=2020-01-01&end=2020-01-31&interval=daily"
        );
        assert_eq!(
            requests[0].headers.get("authorization").map(String::as_str),
            Some("Bearer tradier-key")
        );
        assert_eq!(
            requests[0].headers.get("accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn parses_day_array_in_order() {
        let client = Arc::new(StaticHttpClient::respond(HttpResponse::ok_json(TWO_DAYS)));
        let series = adapter(client).daily_history(&request()).await.expect("history");

        assert_eq!(series.symbol().as_str(), "AAPL");
        assert_eq!(series.len(), 2);
        assert_eq!(series.quotes()[0].date.to_string(), "2020-01-02");
        assert_eq!(series.quotes()[1].close, 74.3575);
        assert_eq!(series.quotes()[1].volume, 146_535_512);
    }

    #[tokio::test]
    async fn accepts_single_day_object() {
        let body = r#"{"history":{"day":{"date":"2020-01-02","open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":10}}}"#;
        let client = Arc::new(StaticHttpClient::respond(HttpResponse::ok_json(body)));
        let series = adapter(client).daily_history(&request()).await.expect("history");
        assert_eq!(series.len(), 1);
    }

    #[tokio::test]
    async fn null_history_is_no_data() {
        let client = Arc::new(StaticHttpClient::respond(HttpResponse::ok_json(r#"{"history":null}"#)));
        let err = adapter(client).daily_history(&request()).await.expect_err("no data");
        assert_eq!(err.kind(), SourceErrorKind::NoData);
    }

    #[tokio::test]
    async fn maps_status_codes() {
        for (status, kind) in [
            (401, SourceErrorKind::Unauthorized),
            (400, SourceErrorKind::InvalidRequest),
            (500, SourceErrorKind::Unavailable),
        ] {
            let client = Arc::new(StaticHttpClient::respond(HttpResponse::new(status, "")));
            let err = adapter(client).daily_history(&request()).await.expect_err("status");
            assert_eq!(err.kind(), kind, "status {status}");
            assert!(err.message().contains(&status.to_string()));
        }
    }

    #[tokio::test]
    async fn transport_failure_is_unavailable() {
        let client = Arc::new(StaticHttpClient::fail(HttpError::new("connection refused")));
        let err = adapter(client).daily_history(&request()).await.expect_err("transport");
        assert_eq!(err.kind(), SourceErrorKind::Unavailable);
    }

    #[tokio::test]
    async fn unordered_days_are_rejected() {
        let body = r#"{"history":{"day":[
            {"date":"2020-01-03","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":1},
            {"date":"2020-01-02","open":1.0,"high":1.0,"low":1.0,"close":1.0,"volume":1}
        ]}}"#;
        let client = Arc::new(StaticHttpClient::respond(HttpResponse::ok_json(body)));
        let err = adapter(client).daily_history(&request()).await.expect_err("unordered");
        assert_eq!(err.kind(), SourceErrorKind::Internal);
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = Arc::new(StaticHttpClient::respond(HttpResponse::ok_json("{}")));
        let adapter = adapter(client).with_base_url(format!("{TRADIER_SANDBOX_URL}/"));
        assert_eq!(adapter.base_url(), TRADIER_SANDBOX_URL);
    }
}
