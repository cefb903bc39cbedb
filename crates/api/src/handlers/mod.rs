pub mod health;
pub mod metrics;
pub mod owners;
pub mod status;

pub use health::health_check;
pub use metrics::get_metrics;
pub use owners::get_owners;
pub use status::{get_address_history, get_ip_status};
