use serde::{Deserialize, Serialize};

/// External blocklist source
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlocklistConfig {
    /// Newline-delimited list of flagged addresses
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BlocklistConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_url() -> String {
    "https://raw.githubusercontent.com/alsyundawy/TrustPositif/main/ipaddress_isp".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("blockscope/", env!("CARGO_PKG_VERSION")).to_string()
}
