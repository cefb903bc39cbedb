pub mod get_history;
pub mod get_latest;
pub mod get_owner_summaries;

pub use get_history::GetAddressHistoryUseCase;
pub use get_latest::GetLatestStatusUseCase;
pub use get_owner_summaries::GetOwnerSummariesUseCase;
