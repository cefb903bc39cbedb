use crate::ports::StatusHistoryReader;
use blockscope_domain::{DomainError, LatestStatus};
use std::sync::Arc;

pub struct GetLatestStatusUseCase {
    reader: Arc<dyn StatusHistoryReader>,
}

impl GetLatestStatusUseCase {
    pub fn new(reader: Arc<dyn StatusHistoryReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self) -> Result<Vec<LatestStatus>, DomainError> {
        self.reader.latest_status().await
    }
}
