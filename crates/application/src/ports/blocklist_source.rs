use async_trait::async_trait;
use blockscope_domain::DomainError;
use std::collections::HashSet;

#[async_trait]
pub trait BlocklistSource: Send + Sync {
    /// Fetch the current flagged-address strings, unvalidated.
    ///
    /// Transport failures (timeout, DNS, non-2xx) return `Err`; callers
    /// substitute an empty set.
    async fn fetch(&self) -> Result<HashSet<String>, DomainError>;
}
