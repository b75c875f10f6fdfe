// Errors surfaced at the HTTP boundary. The pipeline itself never fails.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("too many metrics: {count} (limit {limit})")]
    TooManyMetrics { count: usize, limit: usize },

    #[error("too many timestamps: {count} (limit {limit})")]
    TooManyTimestamps { count: usize, limit: usize },

    #[error("metric {metric} has {samples} samples for {times} timestamps")]
    MisalignedSeries {
        metric: String,
        samples: usize,
        times: usize,
    },
}

impl GraphError {
    pub fn status(&self) -> StatusCode {
        match self {
            GraphError::TooManyMetrics { .. } | GraphError::TooManyTimestamps { .. } => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            GraphError::MisalignedSeries { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for GraphError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "graph request rejected");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
