//! Blockscope Domain Layer
pub mod address_range;
pub mod blocklist;
pub mod config;
pub mod cycle;
pub mod errors;
pub mod owner;
pub mod range_parser;
pub mod status;
pub mod validators;

pub use address_range::{total_size, AddressFamily, AddressRange};
pub use blocklist::BlocklistSnapshot;
pub use config::{CliOverrides, Config, ConfigError};
pub use cycle::{CycleReport, OwnerReport};
pub use errors::DomainError;
pub use owner::{derive_owner_code, Owner, OwnerSource};
pub use range_parser::{parse_range_line, parse_range_text, ParsedRanges, RejectedLine};
pub use status::{
    host_notation, CycleId, CycleTimestamp, LatestStatus, MatchRecord, MatchStatus, OwnerCounts,
    OwnerSummary,
};
