use crate::address_range::AddressFamily;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Format of persisted timestamps: local wall-clock time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Blocked,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Blocked => "Blocked",
        }
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Blocked" => Ok(MatchStatus::Blocked),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier the store allocates when a cycle begins. Increases with
/// insertion order, which breaks ties between cycles sharing a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(pub i64);

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp shared by every record of one cycle.
///
/// The text form sorts lexicographically in time order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleTimestamp(Arc<str>);

impl CycleTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(Arc::from(dt.format(TIMESTAMP_FORMAT).to_string().as_str()))
    }

    /// Accepts only the persisted `YYYY-MM-DD HH:MM:SS` form.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .ok()
            .map(|_| Self(Arc::from(s)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Seconds since the Unix epoch, interpreting the text as local time.
    pub fn unix_seconds(&self) -> Option<i64> {
        let naive = NaiveDateTime::parse_from_str(&self.0, TIMESTAMP_FORMAT).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp())
    }
}

impl fmt::Display for CycleTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `10.0.0.1` → `10.0.0.1/32`, `2001:db8::1` → `2001:db8::1/128`.
pub fn host_notation(ip: &IpAddr) -> String {
    format!("{}{}", ip, AddressFamily::of(ip).host_suffix())
}

/// One durable observation: `address` was inside `owner_code` at `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub cycle_id: CycleId,
    pub timestamp: CycleTimestamp,
    pub owner_code: Arc<str>,
    /// Address with its single-host suffix.
    pub address: String,
    pub status: MatchStatus,
}

impl MatchRecord {
    pub fn blocked(
        cycle_id: CycleId,
        timestamp: CycleTimestamp,
        owner_code: Arc<str>,
        ip: &IpAddr,
    ) -> Self {
        Self {
            cycle_id,
            timestamp,
            owner_code,
            address: host_notation(ip),
            status: MatchStatus::Blocked,
        }
    }
}

/// Per-owner counts for one cycle.
///
/// Not-blocked addresses are never enumerated; the count is a subtraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerCounts {
    pub owner_code: Arc<str>,
    pub total_addresses: u128,
    pub blocked_count: u128,
    pub not_blocked_count: u128,
}

impl OwnerCounts {
    pub fn new(owner_code: Arc<str>, total_addresses: u128, blocked_count: u128) -> Self {
        Self {
            owner_code,
            total_addresses,
            blocked_count,
            not_blocked_count: total_addresses.saturating_sub(blocked_count),
        }
    }

    /// Counts for an owner evaluated against nothing.
    pub fn nothing_blocked(owner_code: Arc<str>, total_addresses: u128) -> Self {
        Self::new(owner_code, total_addresses, 0)
    }
}

/// Latest-status projection row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestStatus {
    pub owner_code: String,
    pub address: String,
    pub status: MatchStatus,
}

/// Most recently persisted counts of an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSummary {
    pub cycle_id: CycleId,
    pub timestamp: CycleTimestamp,
    pub counts: OwnerCounts,
}
