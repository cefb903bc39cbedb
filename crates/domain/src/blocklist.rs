use std::collections::{BTreeSet, HashSet};
use std::net::IpAddr;

/// Validated view of one blocklist fetch.
///
/// Captured once per cycle and shared by every owner so all owners are
/// evaluated against the same instant.
#[derive(Debug, Clone, Default)]
pub struct BlocklistSnapshot {
    addresses: BTreeSet<IpAddr>,
    invalid_entries: usize,
    available: bool,
}

impl BlocklistSnapshot {
    /// Validate raw entries. Blank entries are ignored, unparseable ones
    /// are counted and dropped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut addresses = BTreeSet::new();
        let mut invalid_entries = 0;

        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            match entry.parse::<IpAddr>() {
                Ok(ip) => {
                    addresses.insert(ip);
                }
                Err(_) => invalid_entries += 1,
            }
        }

        Self {
            addresses,
            invalid_entries,
            available: true,
        }
    }

    /// Snapshot used when the source could not be reached.
    pub fn unavailable() -> Self {
        Self {
            addresses: BTreeSet::new(),
            invalid_entries: 0,
            available: false,
        }
    }

    /// Valid addresses in ascending order.
    pub fn addresses(&self) -> impl Iterator<Item = &IpAddr> {
        self.addresses.iter()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn invalid_entries(&self) -> usize {
        self.invalid_entries
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl From<HashSet<String>> for BlocklistSnapshot {
    fn from(entries: HashSet<String>) -> Self {
        Self::from_entries(entries)
    }
}
