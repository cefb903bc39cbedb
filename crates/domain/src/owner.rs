use crate::address_range::{total_size, AddressRange};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

/// Where an owner's ranges come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OwnerSource {
    /// Short owner code, e.g. `AS136052`. Derived from `path` when absent.
    #[serde(default)]
    pub code: Option<String>,

    /// Text file with one CIDR per line.
    pub path: String,
}

impl OwnerSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            code: None,
            path: path.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn owner_code(&self) -> Arc<str> {
        match &self.code {
            Some(code) if !code.trim().is_empty() => Arc::from(code.trim()),
            _ => Arc::from(derive_owner_code(&self.path).as_str()),
        }
    }
}

/// Derive an owner code from a range file name.
///
/// `IDCH-AS136052.txt` yields `AS136052`: the second dash-separated segment
/// of the file name, without its `.txt` extension. Names without a dash fall
/// back to the file stem.
pub fn derive_owner_code(path: &str) -> String {
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);

    match file_name.split('-').nth(1) {
        Some(segment) if !segment.is_empty() => segment.replace(".txt", ""),
        _ => Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name)
            .to_string(),
    }
}

/// A monitored network: an owner code and its ranges, fixed for one cycle.
#[derive(Debug, Clone)]
pub struct Owner {
    pub code: Arc<str>,
    pub ranges: Vec<AddressRange>,
}

impl Owner {
    pub fn new(code: impl Into<Arc<str>>, ranges: Vec<AddressRange>) -> Self {
        Self {
            code: code.into(),
            ranges,
        }
    }

    /// First matching range short-circuits; overlapping ranges are harmless.
    pub fn owns(&self, ip: IpAddr) -> bool {
        self.ranges.iter().any(|range| range.contains(ip))
    }

    pub fn total_addresses(&self) -> u128 {
        total_size(&self.ranges)
    }
}
