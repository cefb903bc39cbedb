use super::{Adapters, Repositories};
use blockscope_api::AppState;
use blockscope_application::use_cases::{
    GetAddressHistoryUseCase, GetLatestStatusUseCase, GetOwnerSummariesUseCase,
    RunEvaluationCycleUseCase,
};
use blockscope_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub run_cycle: Arc<RunEvaluationCycleUseCase>,
    pub get_latest: Arc<GetLatestStatusUseCase>,
    pub get_owner_summaries: Arc<GetOwnerSummariesUseCase>,
    pub get_history: Arc<GetAddressHistoryUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, adapters: &Adapters) -> Self {
        Self {
            run_cycle: Arc::new(RunEvaluationCycleUseCase::new(
                config.owners.clone(),
                adapters.range_source.clone(),
                adapters.blocklist.clone(),
                repos.status.clone(),
                adapters.metrics.clone(),
            )),
            get_latest: Arc::new(GetLatestStatusUseCase::new(repos.status.clone())),
            get_owner_summaries: Arc::new(GetOwnerSummariesUseCase::new(repos.status.clone())),
            get_history: Arc::new(GetAddressHistoryUseCase::new(repos.status.clone())),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_latest: self.get_latest.clone(),
            get_owner_summaries: self.get_owner_summaries.clone(),
            get_history: self.get_history.clone(),
        }
    }
}
