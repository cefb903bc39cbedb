pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{cors_layer, create_api_routes, create_metrics_routes};
pub use state::{AppState, MetricsState};
