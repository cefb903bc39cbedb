use super::server::default_bind_address;
use serde::{Deserialize, Serialize};

/// Prometheus exposition binding
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Serve `/metrics` (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Port of the metrics listener (default: 8000)
    #[serde(default = "default_metrics_port")]
    pub port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_metrics_port(),
            bind_address: default_bind_address(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_metrics_port() -> u16 {
    8000
}
