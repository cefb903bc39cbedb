use crate::ports::StatusHistoryReader;
use blockscope_domain::{DomainError, OwnerSummary};
use std::sync::Arc;

pub struct GetOwnerSummariesUseCase {
    reader: Arc<dyn StatusHistoryReader>,
}

impl GetOwnerSummariesUseCase {
    pub fn new(reader: Arc<dyn StatusHistoryReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self) -> Result<Vec<OwnerSummary>, DomainError> {
        self.reader.owner_summaries().await
    }
}
