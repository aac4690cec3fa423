//! HTTP API handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use crate::companies::{Company, COMPANIES};
use crate::error::ApiError;
use crate::provider::types::PricePoint;
use crate::provider::HistoryProvider;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Market-data provider backing `/api/stock-data`.
    pub provider: Arc<dyn HistoryProvider>,
}

impl AppState {
    /// Create app state around a provider.
    pub fn new(provider: Arc<dyn HistoryProvider>) -> Self {
        Self { provider }
    }
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Fixed greeting for the dashboard frontend.
    pub message: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Price history response for one ticker.
#[derive(Debug, Serialize)]
pub struct StockDataResponse {
    /// The ticker as requested.
    pub ticker: String,
    /// Daily bars, chronologically ascending.
    pub data: Vec<PricePoint>,
}

/// Root handler - fixed welcome message, query parameters ignored.
pub async fn root() -> impl IntoResponse {
    Json(WelcomeResponse {
        message: "Welcome to the Stock Market Dashboard API!",
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Company directory handler - the fixed table, in insertion order.
pub async fn companies() -> Json<[Company; 10]> {
    Json(COMPANIES)
}

/// Price history handler - one year of daily bars for the path ticker.
pub async fn stock_data(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<StockDataResponse>, ApiError> {
    let data = state.provider.fetch_daily_history(&ticker).await?;

    Ok(Json(StockDataResponse { ticker, data }))
}
