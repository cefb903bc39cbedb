pub mod owner;
pub mod status;

pub use owner::OwnerSummaryResponse;
pub use status::{HistoryEntryResponse, HistoryQuery, IpStatusResponse};
