use crate::DomainError;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Width of an address of this family in bits.
    pub fn bits(&self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }

    /// Suffix marking a single host, e.g. `/32`.
    pub fn host_suffix(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "/32",
            AddressFamily::V6 => "/128",
        }
    }
}

/// A CIDR block owned by a monitored network.
///
/// Host bits beyond the prefix are cleared when the range is parsed, so
/// `10.0.0.7/30` and `10.0.0.4/30` describe the same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressRange {
    network: IpNetwork,
}

impl AddressRange {
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, DomainError> {
        let network = IpNetwork::new(addr, prefix)
            .map_err(|e| DomainError::InvalidCidr(format!("{}/{}: {}", addr, prefix, e)))?;
        Self::normalized(network)
    }

    fn normalized(network: IpNetwork) -> Result<Self, DomainError> {
        let network = IpNetwork::new(network.network(), network.prefix())
            .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", network, e)))?;
        Ok(Self { network })
    }

    /// Parse a CIDR in non-strict mode. A bare address is a single-host range.
    pub fn parse(cidr: &str) -> Result<Self, DomainError> {
        let trimmed = cidr.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCidr("CIDR cannot be empty".to_string()));
        }

        let network = IpNetwork::from_str(trimmed)
            .map_err(|e| DomainError::InvalidCidr(format!("{}: {}", trimmed, e)))?;
        Self::normalized(network)
    }

    pub fn network_address(&self) -> IpAddr {
        self.network.network()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.network.network())
    }

    /// Addresses of the other family are never contained.
    pub fn contains(&self, ip: IpAddr) -> bool {
        AddressFamily::of(&ip) == self.family() && self.network.contains(ip)
    }

    /// Number of addresses in the range, `2^(bits - prefix)`.
    ///
    /// Computed without enumeration. The IPv6 `/0` range holds 2^128
    /// addresses, one more than `u128` can express, and saturates.
    pub fn size(&self) -> u128 {
        let host_bits = u32::from(self.family().bits() - self.prefix());
        1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.network(), self.network.prefix())
    }
}

impl FromStr for AddressRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Sum of range sizes, saturating rather than wrapping.
pub fn total_size(ranges: &[AddressRange]) -> u128 {
    ranges
        .iter()
        .fold(0u128, |acc, range| acc.saturating_add(range.size()))
}
