use blockscope_domain::{LatestStatus, MatchRecord};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IpStatusResponse {
    pub owner_code: String,
    pub address: String,
    pub status: String,
}

impl IpStatusResponse {
    pub fn from_status(status: LatestStatus) -> Self {
        Self {
            owner_code: status.owner_code,
            address: status.address,
            status: status.status.as_str().to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct HistoryQuery {
    pub owner: String,
    pub address: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct HistoryEntryResponse {
    pub cycle_id: i64,
    pub timestamp: String,
    pub owner_code: String,
    pub address: String,
    pub status: String,
}

impl HistoryEntryResponse {
    pub fn from_record(record: MatchRecord) -> Self {
        Self {
            cycle_id: record.cycle_id.0,
            timestamp: record.timestamp.as_str().to_string(),
            owner_code: record.owner_code.to_string(),
            address: record.address,
            status: record.status.as_str().to_string(),
        }
    }
}
