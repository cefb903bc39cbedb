#![allow(dead_code)]

use async_trait::async_trait;
use blockscope_application::ports::{
    BlocklistSource, MetricsPublisher, RangeSource, StatusHistoryReader, StatusRecorder,
};
use blockscope_domain::{
    AddressRange, CycleId, CycleReport, CycleTimestamp, DomainError, LatestStatus, MatchRecord,
    OwnerCounts, OwnerSource, OwnerSummary,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock RangeSource
// ============================================================================

pub struct MockRangeSource {
    ranges: Arc<RwLock<HashMap<String, Vec<AddressRange>>>>,
    unreadable: Arc<RwLock<HashSet<String>>>,
    call_count: Arc<AtomicU64>,
}

impl MockRangeSource {
    pub fn new() -> Self {
        Self {
            ranges: Arc::new(RwLock::new(HashMap::new())),
            unreadable: Arc::new(RwLock::new(HashSet::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_ranges(&self, path: &str, cidrs: &[&str]) {
        let ranges = cidrs
            .iter()
            .map(|c| AddressRange::parse(c).unwrap())
            .collect();
        self.ranges.write().await.insert(path.to_string(), ranges);
    }

    pub async fn set_unreadable(&self, path: &str) {
        self.unreadable.write().await.insert(path.to_string());
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RangeSource for MockRangeSource {
    async fn load(&self, owner: &OwnerSource) -> Result<Vec<AddressRange>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.unreadable.read().await.contains(&owner.path) {
            return Err(DomainError::SourceUnavailable(format!(
                "{}: permission denied",
                owner.path
            )));
        }
        Ok(self
            .ranges
            .read()
            .await
            .get(&owner.path)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock BlocklistSource
// ============================================================================

pub struct MockBlocklistSource {
    entries: Arc<RwLock<HashSet<String>>>,
    should_fail: Arc<RwLock<bool>>,
    call_count: Arc<AtomicU64>,
}

impl MockBlocklistSource {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashSet::new())),
            should_fail: Arc::new(RwLock::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_entries(entries: &[&str]) -> Self {
        let source = Self::new();
        source.entries.try_write().unwrap().extend(entries.iter().map(|e| e.to_string()));
        source
    }

    pub async fn set_entries(&self, entries: &[&str]) {
        *self.entries.write().await = entries.iter().map(|e| e.to_string()).collect();
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BlocklistSource for MockBlocklistSource {
    async fn fetch(&self) -> Result<HashSet<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::SourceUnavailable(
                "connection timed out".to_string(),
            ));
        }
        Ok(self.entries.read().await.clone())
    }
}

// ============================================================================
// In-memory StatusRecorder + StatusHistoryReader
// ============================================================================

pub struct InMemoryStatusStore {
    records: Arc<RwLock<Vec<MatchRecord>>>,
    counts: Arc<RwLock<Vec<(CycleId, CycleTimestamp, OwnerCounts)>>>,
    next_cycle: Arc<AtomicI64>,
    fail_begin: Arc<RwLock<bool>>,
    fail_addresses: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            counts: Arc::new(RwLock::new(Vec::new())),
            next_cycle: Arc::new(AtomicI64::new(1)),
            fail_begin: Arc::new(RwLock::new(false)),
            fail_addresses: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn set_fail_begin(&self, fail: bool) {
        *self.fail_begin.write().await = fail;
    }

    /// Reject appends of this host-notation address.
    pub async fn fail_address(&self, address: &str) {
        self.fail_addresses.write().await.insert(address.to_string());
    }

    pub async fn records(&self) -> Vec<MatchRecord> {
        self.records.read().await.clone()
    }

    pub async fn counts_rows(&self) -> usize {
        self.counts.read().await.len()
    }
}

#[async_trait]
impl StatusRecorder for InMemoryStatusStore {
    async fn begin_cycle(&self, _timestamp: &CycleTimestamp) -> Result<CycleId, DomainError> {
        if *self.fail_begin.read().await {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        Ok(CycleId(self.next_cycle.fetch_add(1, Ordering::SeqCst)))
    }

    async fn append(&self, record: &MatchRecord) -> Result<(), DomainError> {
        if self.fail_addresses.read().await.contains(&record.address) {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn record_counts(
        &self,
        cycle_id: CycleId,
        timestamp: &CycleTimestamp,
        counts: &OwnerCounts,
    ) -> Result<(), DomainError> {
        self.counts
            .write()
            .await
            .push((cycle_id, timestamp.clone(), counts.clone()));
        Ok(())
    }
}

#[async_trait]
impl StatusHistoryReader for InMemoryStatusStore {
    async fn latest_status(&self) -> Result<Vec<LatestStatus>, DomainError> {
        let latest_cycles: HashMap<String, CycleId> = self.latest_cycles().await;
        let mut rows: Vec<LatestStatus> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| latest_cycles.get(r.owner_code.as_ref()) == Some(&r.cycle_id))
            .map(|r| LatestStatus {
                owner_code: r.owner_code.to_string(),
                address: r.address.clone(),
                status: r.status,
            })
            .collect();
        rows.sort_by(|a, b| a.owner_code.cmp(&b.owner_code));
        Ok(rows)
    }

    async fn owner_summaries(&self) -> Result<Vec<OwnerSummary>, DomainError> {
        let mut latest: HashMap<String, OwnerSummary> = HashMap::new();
        for (cycle_id, timestamp, counts) in self.counts.read().await.iter() {
            latest.insert(
                counts.owner_code.to_string(),
                OwnerSummary {
                    cycle_id: *cycle_id,
                    timestamp: timestamp.clone(),
                    counts: counts.clone(),
                },
            );
        }
        let mut summaries: Vec<OwnerSummary> = latest.into_values().collect();
        summaries.sort_by(|a, b| a.counts.owner_code.cmp(&b.counts.owner_code));
        Ok(summaries)
    }

    async fn history(
        &self,
        owner_code: &str,
        address: &str,
    ) -> Result<Vec<MatchRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.owner_code.as_ref() == owner_code && r.address == address)
            .cloned()
            .collect())
    }

    async fn record_count(&self) -> Result<u64, DomainError> {
        Ok(self.records.read().await.len() as u64)
    }
}

impl InMemoryStatusStore {
    async fn latest_cycles(&self) -> HashMap<String, CycleId> {
        let mut latest = HashMap::new();
        for (cycle_id, _, counts) in self.counts.read().await.iter() {
            let entry = latest
                .entry(counts.owner_code.to_string())
                .or_insert(*cycle_id);
            if *cycle_id > *entry {
                *entry = *cycle_id;
            }
        }
        // A cycle whose counts row was rejected still owns its match rows
        for record in self.records.read().await.iter() {
            let entry = latest
                .entry(record.owner_code.to_string())
                .or_insert(record.cycle_id);
            if record.cycle_id > *entry {
                *entry = record.cycle_id;
            }
        }
        latest
    }
}

// ============================================================================
// Recording MetricsPublisher
// ============================================================================

#[derive(Default)]
pub struct RecordingMetrics {
    gauges: Mutex<HashMap<String, (u128, u128)>>,
    publish_count: AtomicU64,
    cycles: Mutex<Vec<CycleReport>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// (blocked, not_blocked) last published for `owner`.
    pub fn gauges_for(&self, owner: &str) -> Option<(u128, u128)> {
        self.gauges.lock().unwrap().get(owner).copied()
    }

    pub fn publish_count(&self) -> u64 {
        self.publish_count.load(Ordering::Relaxed)
    }

    pub fn cycles_recorded(&self) -> usize {
        self.cycles.lock().unwrap().len()
    }
}

impl MetricsPublisher for RecordingMetrics {
    fn publish(&self, counts: &OwnerCounts) {
        self.publish_count.fetch_add(1, Ordering::Relaxed);
        self.gauges.lock().unwrap().insert(
            counts.owner_code.to_string(),
            (counts.blocked_count, counts.not_blocked_count),
        );
    }

    fn record_cycle(&self, report: &CycleReport) {
        self.cycles.lock().unwrap().push(report.clone());
    }
}
