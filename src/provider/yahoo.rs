//! Yahoo Finance chart API client.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::ProviderError;

use super::types::{ChartResponse, PricePoint};
use super::HistoryProvider;

/// Yahoo rejects requests with the default reqwest User-Agent.
const USER_AGENT: &str = "Mozilla/5.0";

/// Client for the Yahoo Finance v8 chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL, e.g. `https://query1.finance.yahoo.com`.
    base_url: String,
}

impl YahooFinanceClient {
    /// Create a new client from config with tuned HTTP settings.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.http_timeout_ms))
            .connect_timeout(std::time::Duration::from_millis(2_000))
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(std::time::Duration::from_secs(90))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.provider_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the chart base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HistoryProvider for YahooFinanceClient {
    #[instrument(skip(self), fields(ticker = %ticker))]
    async fn fetch_daily_history(&self, ticker: &str) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);

        let response = self
            .http
            .get(&url)
            .query(&[("range", "1y"), ("interval", "1d")])
            .send()
            .await?;

        let status = response.status();

        // Unknown symbols come back as an error envelope, usually with a
        // 404 status; parse the body before deciding which failure this is.
        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(format!("failed to parse chart response: {}", e)))?;

        if let Some(error) = body.chart.error {
            if error.code == "Not Found" {
                return Err(ProviderError::NoData {
                    ticker: ticker.to_string(),
                });
            }
            return Err(ProviderError::Upstream(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        if !status.is_success() {
            return Err(ProviderError::Upstream(format!("HTTP {}", status)));
        }

        let points = body
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.into_price_points())
            .unwrap_or_default();

        if points.is_empty() {
            return Err(ProviderError::NoData {
                ticker: ticker.to_string(),
            });
        }

        debug!(bars = points.len(), "fetched daily history");

        Ok(points)
    }
}
