//! Error types for the dashboard API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors from the market-data provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider has no price history for the ticker.
    #[error("no price history found for {ticker}")]
    NoData {
        /// The ticker that came back empty.
        ticker: String,
    },

    /// HTTP request failed.
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the provider response.
    #[error("failed to parse provider response: {0}")]
    Parse(String),

    /// Provider-reported error.
    #[error("provider error: {0}")]
    Upstream(String),
}

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No history exists for the requested ticker.
    #[error("Stock data not found for the given ticker.")]
    NotFound,

    /// Any other failure, message passed through verbatim.
    #[error("{0}")]
    Internal(String),
}

/// JSON error body, matching the `{"detail": ...}` shape the frontend expects.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error detail.
    pub detail: String,
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NoData { .. } => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
