use serde::{Deserialize, Serialize};

/// Query API binding
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_api_port() -> u16 {
    5000
}

pub(crate) fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            bind_address: default_bind_address(),
            cors_allowed_origins: default_cors_origins(),
        }
    }
}
