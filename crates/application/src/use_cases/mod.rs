pub mod evaluation;
pub mod status;

// Re-export use cases
pub use evaluation::RunEvaluationCycleUseCase;
pub use status::{GetAddressHistoryUseCase, GetLatestStatusUseCase, GetOwnerSummariesUseCase};
