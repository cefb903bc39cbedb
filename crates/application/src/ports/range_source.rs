use async_trait::async_trait;
use blockscope_domain::{AddressRange, DomainError, OwnerSource};

#[async_trait]
pub trait RangeSource: Send + Sync {
    /// Load the ranges of one owner, in source order.
    ///
    /// Malformed lines are dropped (and reported) by the implementation.
    /// `Err` means the whole source could not be read; callers treat that as
    /// an empty range set.
    async fn load(&self, owner: &OwnerSource) -> Result<Vec<AddressRange>, DomainError>;
}
