use crate::status::{CycleId, CycleTimestamp, OwnerCounts};
use std::sync::Arc;

/// Outcome of evaluating one owner within a cycle.
#[derive(Debug, Clone)]
pub struct OwnerReport {
    pub counts: OwnerCounts,
    /// Matched addresses in host notation, ascending.
    pub matched: Vec<String>,
    /// False when the range source could not be read.
    pub ranges_loaded: bool,
    pub records_persisted: usize,
    /// Writes the store rejected, match rows and the count summary alike.
    pub records_failed: usize,
}

impl OwnerReport {
    pub fn owner_code(&self) -> &Arc<str> {
        &self.counts.owner_code
    }
}

/// Outcome of one full evaluation cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub timestamp: CycleTimestamp,
    /// None when the store could not open the cycle.
    pub cycle_id: Option<CycleId>,
    pub blocklist_available: bool,
    pub blocklist_entries: usize,
    pub blocklist_invalid_entries: usize,
    pub owners: Vec<OwnerReport>,
}

impl CycleReport {
    pub fn owner(&self, code: &str) -> Option<&OwnerReport> {
        self.owners.iter().find(|o| o.owner_code().as_ref() == code)
    }

    pub fn persistence_failures(&self) -> usize {
        let cycle_failure = usize::from(self.cycle_id.is_none());
        cycle_failure
            + self
                .owners
                .iter()
                .map(|o| o.records_failed)
                .sum::<usize>()
    }
}
