use blockscope_application::use_cases::{
    GetAddressHistoryUseCase, GetLatestStatusUseCase, GetOwnerSummariesUseCase,
};
use blockscope_infrastructure::metrics::PrometheusMetrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_latest: Arc<GetLatestStatusUseCase>,
    pub get_owner_summaries: Arc<GetOwnerSummariesUseCase>,
    pub get_history: Arc<GetAddressHistoryUseCase>,
}

/// State of the metrics listener; only the registry is reachable from it.
#[derive(Clone)]
pub struct MetricsState {
    pub metrics: Arc<PrometheusMetrics>,
}
