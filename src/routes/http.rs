// Handlers: version, health, graph time series

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use super::AppState;
use crate::error::GraphError;
use crate::models::GraphData;
use crate::{NAME, VERSION};
use crate::view::GraphView;

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

pub(super) async fn health_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphQuery {
    /// Comma-separated metric keys; all metrics when omitted.
    metrics: Option<String>,
}

impl GraphQuery {
    fn requested_metrics(&self) -> Option<Vec<String>> {
        self.metrics.as_deref().map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|metric| !metric.is_empty())
                .map(String::from)
                .collect()
        })
    }
}

/// POST /api/graph/timeseries — derives the chart view for one graph payload.
pub(super) async fn timeseries_handler(
    State(state): State<AppState>,
    Query(query): Query<GraphQuery>,
    Json(graph_data): Json<GraphData>,
) -> Result<Json<GraphView>, GraphError> {
    state.config.limits.check(&graph_data)?;
    let requested = query.requested_metrics();
    let view = GraphView::build(&graph_data, requested.as_deref());
    tracing::debug!(
        lines = view.lines.len(),
        units = view.units.len(),
        "timeseries request served"
    );
    Ok(Json(view))
}
