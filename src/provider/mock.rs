//! Mock history provider for unit testing.
//!
//! This module provides a mock provider that can be used in tests
//! without making real network requests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::ProviderError;

use super::types::PricePoint;
use super::HistoryProvider;

/// Configuration for mock provider behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether to fail fetch requests.
    pub fail_fetch: bool,
    /// Message returned on injected failures.
    pub failure_message: String,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock history provider backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MockHistoryProvider {
    /// Mock configuration.
    config: MockConfig,
    /// Histories by ticker.
    histories: Arc<Mutex<HashMap<String, Vec<PricePoint>>>>,
}

impl MockHistoryProvider {
    /// Create a new mock provider with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            histories: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Set the history returned for a ticker.
    pub fn set_history(&self, ticker: impl Into<String>, points: Vec<PricePoint>) {
        let mut histories = self.histories.lock().unwrap();
        histories.insert(ticker.into(), points);
    }

    /// Clear all mock data.
    pub fn clear(&self) {
        self.histories.lock().unwrap().clear();
    }
}

#[async_trait]
impl HistoryProvider for MockHistoryProvider {
    async fn fetch_daily_history(&self, ticker: &str) -> Result<Vec<PricePoint>, ProviderError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail_fetch {
            return Err(ProviderError::Upstream(self.config.failure_message.clone()));
        }

        let histories = self.histories.lock().unwrap();
        match histories.get(ticker) {
            Some(points) if !points.is_empty() => Ok(points.clone()),
            _ => Err(ProviderError::NoData {
                ticker: ticker.to_string(),
            }),
        }
    }
}

/// A short, well-formed fixture history for tests.
pub fn sample_history() -> Vec<PricePoint> {
    vec![
        PricePoint {
            date: "2025-01-13".to_string(),
            open: 415.72,
            high: 418.93,
            low: 412.11,
            close: 417.19,
            volume: 21_503_800,
        },
        PricePoint {
            date: "2025-01-14".to_string(),
            open: 417.80,
            high: 422.04,
            low: 416.26,
            close: 421.58,
            volume: 18_907_200,
        },
        PricePoint {
            date: "2025-01-15".to_string(),
            open: 424.05,
            high: 426.46,
            low: 421.83,
            close: 426.31,
            volume: 20_582_300,
        },
    ]
}
