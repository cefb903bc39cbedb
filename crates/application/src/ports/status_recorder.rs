use async_trait::async_trait;
use blockscope_domain::{CycleId, CycleTimestamp, DomainError, MatchRecord, OwnerCounts};

/// Append-only sink for status history.
///
/// Implementations never update or delete rows.
#[async_trait]
pub trait StatusRecorder: Send + Sync {
    /// Open a cycle and return its id.
    async fn begin_cycle(&self, timestamp: &CycleTimestamp) -> Result<CycleId, DomainError>;

    /// Append one match record.
    async fn append(&self, record: &MatchRecord) -> Result<(), DomainError>;

    /// Append the counts an owner reached in a cycle.
    async fn record_counts(
        &self,
        cycle_id: CycleId,
        timestamp: &CycleTimestamp,
        counts: &OwnerCounts,
    ) -> Result<(), DomainError>;
}
