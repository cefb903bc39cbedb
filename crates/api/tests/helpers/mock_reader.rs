#![allow(dead_code)]

use async_trait::async_trait;
use blockscope_api::AppState;
use blockscope_application::ports::StatusHistoryReader;
use blockscope_application::use_cases::{
    GetAddressHistoryUseCase, GetLatestStatusUseCase, GetOwnerSummariesUseCase,
};
use blockscope_domain::{
    CycleId, CycleTimestamp, DomainError, LatestStatus, MatchRecord, MatchStatus, OwnerCounts,
    OwnerSummary,
};
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock StatusHistoryReader
// ============================================================================

pub struct MockStatusReader {
    records: Arc<RwLock<Vec<MatchRecord>>>,
    summaries: Arc<RwLock<Vec<OwnerSummary>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockStatusReader {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            summaries: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add_match(&self, cycle: i64, timestamp: &str, owner: &str, ip: &str) {
        let ip: IpAddr = ip.parse().unwrap();
        self.records.write().await.push(MatchRecord::blocked(
            CycleId(cycle),
            CycleTimestamp::parse(timestamp).unwrap(),
            Arc::from(owner),
            &ip,
        ));
    }

    pub async fn add_summary(
        &self,
        cycle: i64,
        timestamp: &str,
        owner: &str,
        total: u128,
        blocked: u128,
    ) {
        self.summaries.write().await.push(OwnerSummary {
            cycle_id: CycleId(cycle),
            timestamp: CycleTimestamp::parse(timestamp).unwrap(),
            counts: OwnerCounts::new(Arc::from(owner), total, blocked),
        });
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    async fn check(&self) -> Result<(), DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        Ok(())
    }

    /// Latest cycle id per owner, across summaries and match rows.
    async fn latest_cycles(&self) -> Vec<(String, i64)> {
        let mut seen: Vec<(String, i64)> = self
            .summaries
            .read()
            .await
            .iter()
            .map(|s| (s.counts.owner_code.to_string(), s.cycle_id.0))
            .collect();
        seen.extend(
            self.records
                .read()
                .await
                .iter()
                .map(|r| (r.owner_code.to_string(), r.cycle_id.0)),
        );

        let mut latest: Vec<(String, i64)> = Vec::new();
        for (owner, cycle) in seen {
            match latest.iter_mut().find(|(o, _)| *o == owner) {
                Some(entry) => entry.1 = entry.1.max(cycle),
                None => latest.push((owner, cycle)),
            }
        }
        latest
    }

    /// Latest cycle id per owner among the summaries only.
    async fn latest_summary_cycles(&self) -> Vec<(String, i64)> {
        let mut latest: Vec<(String, i64)> = Vec::new();
        for s in self.summaries.read().await.iter() {
            let owner = s.counts.owner_code.to_string();
            match latest.iter_mut().find(|(o, _)| *o == owner) {
                Some(entry) => entry.1 = entry.1.max(s.cycle_id.0),
                None => latest.push((owner, s.cycle_id.0)),
            }
        }
        latest
    }
}

#[async_trait]
impl StatusHistoryReader for MockStatusReader {
    async fn latest_status(&self) -> Result<Vec<LatestStatus>, DomainError> {
        self.check().await?;
        let latest = self.latest_cycles().await;

        let mut rows: Vec<LatestStatus> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| {
                latest
                    .iter()
                    .any(|(o, c)| o.as_str() == r.owner_code.as_ref() && *c == r.cycle_id.0)
            })
            .map(|r| LatestStatus {
                owner_code: r.owner_code.to_string(),
                address: r.address.clone(),
                status: MatchStatus::Blocked,
            })
            .collect();
        rows.sort_by(|a, b| a.owner_code.cmp(&b.owner_code));
        Ok(rows)
    }

    async fn owner_summaries(&self) -> Result<Vec<OwnerSummary>, DomainError> {
        self.check().await?;
        let latest = self.latest_summary_cycles().await;

        let mut out: Vec<OwnerSummary> = self
            .summaries
            .read()
            .await
            .iter()
            .filter(|s| {
                latest
                    .iter()
                    .any(|(o, c)| o.as_str() == s.counts.owner_code.as_ref() && *c == s.cycle_id.0)
            })
            .cloned()
            .collect();
        out.sort_by(|a, b| a.counts.owner_code.cmp(&b.counts.owner_code));
        Ok(out)
    }

    async fn history(
        &self,
        owner_code: &str,
        address: &str,
    ) -> Result<Vec<MatchRecord>, DomainError> {
        self.check().await?;
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
        self.check().await?;
        Ok(self.records.read().await.len() as u64)
    }
}

pub fn app_state(reader: Arc<MockStatusReader>) -> AppState {
    AppState {
        get_latest: Arc::new(GetLatestStatusUseCase::new(reader.clone())),
        get_owner_summaries: Arc::new(GetOwnerSummariesUseCase::new(reader.clone())),
        get_history: Arc::new(GetAddressHistoryUseCase::new(reader)),
    }
}
