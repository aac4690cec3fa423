//! In-process API tests driving the router against the mock provider.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use stock_dashboard::api::{create_router, AppState};
use stock_dashboard::provider::mock::{sample_history, MockConfig, MockHistoryProvider};

const EXPECTED_TICKERS: [&str; 10] = [
    "BRITANNIA.NS",
    "MSFT",
    "AMZN",
    "NVDA",
    "GOOGL",
    "TSLA",
    "META",
    "BRK-B",
    "LLY",
    "JPM",
];

fn router_with(provider: MockHistoryProvider) -> Router {
    create_router(AppState::new(Arc::new(provider)))
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let router = router_with(MockHistoryProvider::new());

    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Welcome to the Stock Market Dashboard API!"
    );
}

#[tokio::test]
async fn root_ignores_query_parameters() {
    let router = router_with(MockHistoryProvider::new());

    let response = get(&router, "/?refresh=true&ticker=MSFT").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "Welcome to the Stock Market Dashboard API!"
    );
}

#[tokio::test]
async fn companies_returns_fixed_table_in_order() {
    let router = router_with(MockHistoryProvider::new());

    let response = get(&router, "/api/companies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 10);

    let tickers: Vec<&str> = entries
        .iter()
        .map(|e| e["ticker"].as_str().unwrap())
        .collect();
    assert_eq!(tickers, EXPECTED_TICKERS);

    assert_eq!(entries[0]["name"], "Britannia Industries Ltd.");
    assert_eq!(entries[4]["name"], "Alphabet Inc. (Google)");
    assert_eq!(entries[9]["name"], "JPMorgan Chase & Co.");
}

#[tokio::test]
async fn stock_data_returns_history_for_known_ticker() {
    let provider = MockHistoryProvider::new();
    provider.set_history("MSFT", sample_history());
    let router = router_with(provider);

    let response = get(&router, "/api/stock-data/MSFT").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["ticker"], "MSFT");

    let data = body["data"].as_array().unwrap();
    assert!(!data.is_empty());

    // Dates are non-decreasing and every bar is complete.
    let dates: Vec<&str> = data.iter().map(|p| p["date"].as_str().unwrap()).collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));

    for point in data {
        let open = point["open"].as_f64().unwrap();
        let high = point["high"].as_f64().unwrap();
        let low = point["low"].as_f64().unwrap();
        let close = point["close"].as_f64().unwrap();
        assert!(point["volume"].as_u64().is_some());

        assert!(high >= low);
        assert!(high >= open.max(close));
        assert!(low <= open.min(close));
    }
}

#[tokio::test]
async fn stock_data_unknown_ticker_returns_404() {
    let router = router_with(MockHistoryProvider::new());

    let response = get(&router, "/api/stock-data/FAKETICKER").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["detail"], "Stock data not found for the given ticker.");
}

#[tokio::test]
async fn stock_data_provider_failure_returns_500() {
    let provider = MockHistoryProvider::with_config(MockConfig {
        fail_fetch: true,
        failure_message: "connection reset by peer".to_string(),
        ..Default::default()
    });
    let router = router_with(provider);

    let response = get(&router, "/api/stock-data/MSFT").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(!detail.is_empty());
    assert!(detail.contains("connection reset by peer"));
}

#[tokio::test]
async fn cross_origin_requests_are_permitted() {
    let router = router_with(MockHistoryProvider::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .header(header::ORIGIN, "http://dashboard.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://dashboard.example")
    );
    assert_eq!(
        headers
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}
