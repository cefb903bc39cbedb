use async_trait::async_trait;
use blockscope_domain::{DomainError, LatestStatus, MatchRecord, OwnerSummary};

/// Read-only view over the status history.
#[async_trait]
pub trait StatusHistoryReader: Send + Sync {
    /// Match rows of each owner's latest cycle, sorted by owner, then in
    /// insertion order (ascending address within a cycle).
    async fn latest_status(&self) -> Result<Vec<LatestStatus>, DomainError>;

    /// Latest persisted counts of each owner, sorted by owner.
    async fn owner_summaries(&self) -> Result<Vec<OwnerSummary>, DomainError>;

    /// Every record of one (owner, address) pair, oldest first.
    async fn history(
        &self,
        owner_code: &str,
        address: &str,
    ) -> Result<Vec<MatchRecord>, DomainError>;

    /// Total number of match rows ever written.
    async fn record_count(&self) -> Result<u64, DomainError>;
}
