use serde::{Deserialize, Serialize};

/// Database configuration for the status history
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./ip_status.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum pooled connections; readers share them with the writer (default: 4)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite://{}", self.path)
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_db_path() -> String {
    "./ip_status.db".to_string()
}

fn default_max_connections() -> u32 {
    4
}
