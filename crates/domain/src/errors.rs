use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid CIDR: {0}")]
    InvalidCidr(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Metrics error: {0}")]
    Metrics(String),
}
