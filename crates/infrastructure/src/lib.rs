//! Blockscope Infrastructure Layer
//!
//! Adapters behind the application ports: range files, the HTTP blocklist,
//! the SQLite status history and the Prometheus registry.
pub mod database;
pub mod metrics;
pub mod repositories;
pub mod sources;
