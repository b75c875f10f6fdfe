// HTTP routes

mod http;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: AppConfig,
}

pub fn app(config: AppConfig) -> Router {
    let body_limit = config.limits.max_body_bytes;
    let state = AppState { config };
    Router::new()
        .route("/", get(|| async { "perfgraph: performance graph pipeline" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/health", get(http::health_handler)) // GET /health
        // POST /api/graph/timeseries
        .route("/api/graph/timeseries", post(http::timeseries_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
