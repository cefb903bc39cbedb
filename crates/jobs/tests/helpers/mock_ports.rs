#![allow(dead_code)]

use async_trait::async_trait;
use blockscope_application::ports::{
    BlocklistSource, MetricsPublisher, RangeSource, StatusRecorder,
};
use blockscope_application::use_cases::RunEvaluationCycleUseCase;
use blockscope_domain::{
    AddressRange, CycleId, CycleReport, CycleTimestamp, DomainError, MatchRecord, OwnerCounts,
    OwnerSource,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock RangeSource: every owner holds the same ranges
// ============================================================================

pub struct StaticRangeSource {
    ranges: Vec<AddressRange>,
}

impl StaticRangeSource {
    pub fn new(cidrs: &[&str]) -> Self {
        Self {
            ranges: cidrs
                .iter()
                .map(|c| AddressRange::parse(c).unwrap())
                .collect(),
        }
    }
}

#[async_trait]
impl RangeSource for StaticRangeSource {
    async fn load(&self, _owner: &OwnerSource) -> Result<Vec<AddressRange>, DomainError> {
        Ok(self.ranges.clone())
    }
}

// ============================================================================
// Mock BlocklistSource
// ============================================================================

pub struct CountingBlocklist {
    entries: HashSet<String>,
    call_count: Arc<AtomicU64>,
}

impl CountingBlocklist {
    pub fn new(entries: &[&str]) -> Self {
        Self {
            entries: entries.iter().map(|e| e.to_string()).collect(),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BlocklistSource for CountingBlocklist {
    async fn fetch(&self) -> Result<HashSet<String>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.entries.clone())
    }
}

// ============================================================================
// Mock StatusRecorder
// ============================================================================

pub struct MemoryRecorder {
    next_cycle: AtomicI64,
    records: Mutex<Vec<MatchRecord>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self {
            next_cycle: AtomicI64::new(1),
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn cycles_opened(&self) -> i64 {
        self.next_cycle.load(Ordering::SeqCst) - 1
    }
}

#[async_trait]
impl StatusRecorder for MemoryRecorder {
    async fn begin_cycle(&self, _timestamp: &CycleTimestamp) -> Result<CycleId, DomainError> {
        Ok(CycleId(self.next_cycle.fetch_add(1, Ordering::SeqCst)))
    }

    async fn append(&self, record: &MatchRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn record_counts(
        &self,
        _cycle_id: CycleId,
        _timestamp: &CycleTimestamp,
        _counts: &OwnerCounts,
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

// ============================================================================
// Mock MetricsPublisher
// ============================================================================

pub struct CountingMetrics {
    publishes: AtomicU64,
    cycles: AtomicU64,
}

impl CountingMetrics {
    pub fn new() -> Self {
        Self {
            publishes: AtomicU64::new(0),
            cycles: AtomicU64::new(0),
        }
    }

    pub fn publish_count(&self) -> u64 {
        self.publishes.load(Ordering::Relaxed)
    }

    pub fn cycles_recorded(&self) -> u64 {
        self.cycles.load(Ordering::Relaxed)
    }
}

impl MetricsPublisher for CountingMetrics {
    fn publish(&self, _counts: &OwnerCounts) {
        self.publishes.fetch_add(1, Ordering::Relaxed);
    }

    fn record_cycle(&self, _report: &CycleReport) {
        self.cycles.fetch_add(1, Ordering::Relaxed);
    }
}

// ============================================================================
// Fixture
// ============================================================================

pub struct Fixture {
    pub blocklist: Arc<CountingBlocklist>,
    pub recorder: Arc<MemoryRecorder>,
    pub metrics: Arc<CountingMetrics>,
    pub use_case: Arc<RunEvaluationCycleUseCase>,
}

/// Two owners over 10.0.0.0/30 with one blocked address.
pub fn fixture() -> Fixture {
    let blocklist = Arc::new(CountingBlocklist::new(&["10.0.0.1"]));
    let recorder = Arc::new(MemoryRecorder::new());
    let metrics = Arc::new(CountingMetrics::new());

    let use_case = Arc::new(RunEvaluationCycleUseCase::new(
        vec![
            OwnerSource::new("A-AS1.txt"),
            OwnerSource::new("B-AS2.txt"),
        ],
        Arc::new(StaticRangeSource::new(&["10.0.0.0/30"])),
        blocklist.clone(),
        recorder.clone(),
        metrics.clone(),
    ));

    Fixture {
        blocklist,
        recorder,
        metrics,
        use_case,
    }
}
