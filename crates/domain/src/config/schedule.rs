use serde::{Deserialize, Serialize};

/// Evaluation cycle cadence
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// Delay between the end of one cycle and the start of the next,
    /// in seconds (default: 300)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    300
}
