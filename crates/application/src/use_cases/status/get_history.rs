use crate::ports::StatusHistoryReader;
use blockscope_domain::{host_notation, DomainError, MatchRecord};
use std::net::IpAddr;
use std::sync::Arc;

/// History of one address within one owner, oldest first.
pub struct GetAddressHistoryUseCase {
    reader: Arc<dyn StatusHistoryReader>,
}

impl GetAddressHistoryUseCase {
    pub fn new(reader: Arc<dyn StatusHistoryReader>) -> Self {
        Self { reader }
    }

    /// `address` may be bare (`10.0.0.1`) or in host notation (`10.0.0.1/32`).
    pub async fn execute(
        &self,
        owner_code: &str,
        address: &str,
    ) -> Result<Vec<MatchRecord>, DomainError> {
        let bare = address.split('/').next().unwrap_or(address).trim();
        let ip: IpAddr = bare
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?;

        self.reader.history(owner_code, &host_notation(&ip)).await
    }
}
