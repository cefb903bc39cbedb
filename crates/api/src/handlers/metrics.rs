use crate::state::MetricsState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

/// Prometheus text exposition of the registry.
pub async fn get_metrics(State(state): State<MetricsState>) -> impl IntoResponse {
    match state.metrics.render() {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => {
            error!(error = %e, "Failed to render metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "encoding error".to_string(),
            )
        }
    }
}
