//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{companies, health, root, stock_data, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    // Demo-grade CORS: any origin, all methods and headers, credentials
    // allowed. Mirroring the request is how wildcard-with-credentials has
    // to be spelled, since literal wildcards are rejected alongside
    // credentialed requests.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/companies", get(companies))
        .route("/api/stock-data/:ticker", get(stock_data))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
