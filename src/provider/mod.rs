//! Market-data provider abstraction.
//!
//! This module handles:
//! - The `HistoryProvider` trait the API is written against
//! - Price history types and the chart wire format
//! - The Yahoo Finance client
//! - Mock provider for testing

pub mod mock;
pub mod types;
pub mod yahoo;

use async_trait::async_trait;

use crate::error::ProviderError;
use types::PricePoint;

/// A source of daily price history, queryable by ticker.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch one year of daily bars for `ticker`, chronologically ascending.
    ///
    /// Returns [`ProviderError::NoData`] when the provider has no history
    /// for the ticker.
    async fn fetch_daily_history(&self, ticker: &str) -> Result<Vec<PricePoint>, ProviderError>;
}

pub use mock::MockHistoryProvider;
pub use types::{ChartResponse, ChartResult};
pub use yahoo::YahooFinanceClient;
