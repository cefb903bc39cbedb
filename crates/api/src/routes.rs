use crate::handlers;
use crate::state::{AppState, MetricsState};
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Creates the query API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ip_status", get(handlers::get_ip_status))
        .route("/ip_status/history", get(handlers::get_address_history))
        .route("/owners", get(handlers::get_owners))
        .with_state(state)
}

/// Routes served on the metrics listener
pub fn create_metrics_routes(state: MetricsState) -> Router {
    Router::new()
        .route("/metrics", get(handlers::get_metrics))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

/// CORS for the query API. `*` (or an empty list) allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(origins)
}
