pub mod adapters;
pub mod repositories;
pub mod use_cases;

pub use adapters::Adapters;
pub use repositories::Repositories;
pub use use_cases::UseCases;
