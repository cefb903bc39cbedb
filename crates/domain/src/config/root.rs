use super::{
    BlocklistConfig, ConfigError, DatabaseConfig, LoggingConfig, MetricsConfig, ScheduleConfig,
    ServerConfig,
};
use crate::owner::OwnerSource;
use crate::validators::{validate_owner_code, validate_url};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub blocklist: BlocklistConfig,

    /// Monitored networks, evaluated in this order every cycle
    #[serde(default = "default_owners")]
    pub owners: Vec<OwnerSource>,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub api_port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub database_path: Option<String>,
    pub interval_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            metrics: MetricsConfig::default(),
            blocklist: BlocklistConfig::default(),
            owners: default_owners(),
            schedule: ScheduleConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_owners() -> Vec<OwnerSource> {
    ["IDCH-AS136052.txt", "CLOUDHOST-AS138608.txt", "AWANKILAT-AS138062.txt"]
        .into_iter()
        .map(OwnerSource::new)
        .collect()
}

impl Config {
    /// Load from `path` (defaults when `None`), then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind.clone();
            self.metrics.bind_address = bind;
        }
        if let Some(port) = overrides.api_port {
            self.server.api_port = port;
        }
        if let Some(port) = overrides.metrics_port {
            self.metrics.port = port;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(secs) = overrides.interval_secs {
            self.schedule.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owners.is_empty() {
            return Err(ConfigError::Validation(
                "at least one owner must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for owner in &self.owners {
            if owner.path.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "owner range file path cannot be empty".to_string(),
                ));
            }
            let code = owner.owner_code();
            validate_owner_code(&code).map_err(ConfigError::Validation)?;
            if !seen.insert(code.clone()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate owner code '{}'",
                    code
                )));
            }
        }

        if self.schedule.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "schedule.interval_secs must be greater than zero".to_string(),
            ));
        }

        validate_url(&self.blocklist.url)
            .map_err(|e| ConfigError::Validation(format!("blocklist.url: {e}")))?;

        if self.blocklist.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "blocklist.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }
}
