//! Configuration module for Blockscope
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Query API binding
//! - `metrics`: Prometheus exposition binding
//! - `blocklist`: External blocklist source
//! - `schedule`: Evaluation cycle cadence
//! - `logging`: Logging settings
//! - `database`: Status history storage
//! - `errors`: Configuration errors

pub mod blocklist;
pub mod database;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod root;
pub mod schedule;
pub mod server;

pub use blocklist::BlocklistConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use metrics::MetricsConfig;
pub use root::{CliOverrides, Config};
pub use schedule::ScheduleConfig;
pub use server::ServerConfig;
