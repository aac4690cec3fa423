//! Price history types and the Yahoo chart API wire format.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar, as served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day, `YYYY-MM-DD` in UTC.
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

/// Top-level chart API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    /// The `chart` envelope.
    pub chart: Chart,
}

/// Chart envelope: either a result set or an error, never both populated.
#[derive(Debug, Clone, Deserialize)]
pub struct Chart {
    /// Result set, one entry per requested symbol.
    pub result: Option<Vec<ChartResult>>,
    /// Provider-reported error.
    pub error: Option<ChartError>,
}

/// Provider-reported error in the chart envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    /// Error code, e.g. "Not Found".
    pub code: String,
    /// Human-readable description.
    pub description: String,
}

/// Per-symbol chart data: epoch timestamps plus parallel OHLCV arrays.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    /// Bar timestamps in epoch seconds.
    pub timestamp: Option<Vec<i64>>,
    /// Indicator blocks holding the quote arrays.
    pub indicators: Indicators,
}

/// Indicator container in a chart result.
#[derive(Debug, Clone, Deserialize)]
pub struct Indicators {
    /// Quote blocks; the chart API returns exactly one per symbol.
    pub quote: Vec<QuoteBlock>,
}

/// Parallel OHLCV arrays; entries are null for days the venue reported no bar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteBlock {
    /// Opening prices.
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    /// Daily highs.
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    /// Daily lows.
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    /// Closing prices.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    /// Volumes.
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResult {
    /// Flatten the parallel arrays into bars, keeping provider order.
    ///
    /// Bars with any missing field are skipped rather than zero-filled.
    pub fn into_price_points(self) -> Vec<PricePoint> {
        let timestamps = self.timestamp.unwrap_or_default();
        let quote = match self.indicators.quote.into_iter().next() {
            Some(q) => q,
            None => return Vec::new(),
        };

        timestamps
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let open = quote.open.get(i).copied().flatten()?;
                let high = quote.high.get(i).copied().flatten()?;
                let low = quote.low.get(i).copied().flatten()?;
                let close = quote.close.get(i).copied().flatten()?;
                let volume = quote.volume.get(i).copied().flatten()?;

                let date = DateTime::from_timestamp(ts, 0)?
                    .format("%Y-%m-%d")
                    .to_string();

                Some(PricePoint {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                })
            })
            .collect()
    }
}
