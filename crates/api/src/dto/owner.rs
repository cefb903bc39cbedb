use blockscope_domain::OwnerSummary;
use serde::Serialize;

/// Latest counts of one owner.
///
/// Counts are strings: IPv6 totals overflow JSON numbers.
#[derive(Serialize, Debug, Clone)]
pub struct OwnerSummaryResponse {
    pub owner_code: String,
    pub cycle_id: i64,
    pub timestamp: String,
    pub total_addresses: String,
    pub blocked_count: String,
    pub not_blocked_count: String,
}

impl OwnerSummaryResponse {
    pub fn from_summary(summary: OwnerSummary) -> Self {
        Self {
            owner_code: summary.counts.owner_code.to_string(),
            cycle_id: summary.cycle_id.0,
            timestamp: summary.timestamp.as_str().to_string(),
            total_addresses: summary.counts.total_addresses.to_string(),
            blocked_count: summary.counts.blocked_count.to_string(),
            not_blocked_count: summary.counts.not_blocked_count.to_string(),
        }
    }
}
