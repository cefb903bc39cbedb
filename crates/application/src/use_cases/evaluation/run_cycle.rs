use crate::ports::{BlocklistSource, MetricsPublisher, RangeSource, StatusRecorder};
use crate::services::MembershipEvaluator;
use blockscope_domain::{
    host_notation, BlocklistSnapshot, CycleId, CycleReport, CycleTimestamp, MatchRecord, Owner,
    OwnerReport, OwnerSource,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Use case: run one evaluation cycle over every configured owner.
///
/// Order of work: one blocklist fetch, one cycle opened in the store, then
/// for each owner (configured order) load ranges, evaluate, append match
/// records in address order, append the count summary, publish gauges.
///
/// Nothing in a cycle is fatal. Unreadable sources become empty collections,
/// rejected writes are logged and counted, and the gauges are always
/// published so they never go silently stale.
pub struct RunEvaluationCycleUseCase {
    owners: Vec<OwnerSource>,
    range_source: Arc<dyn RangeSource>,
    blocklist: Arc<dyn BlocklistSource>,
    recorder: Arc<dyn StatusRecorder>,
    metrics: Arc<dyn MetricsPublisher>,
    evaluator: MembershipEvaluator,
}

impl RunEvaluationCycleUseCase {
    pub fn new(
        owners: Vec<OwnerSource>,
        range_source: Arc<dyn RangeSource>,
        blocklist: Arc<dyn BlocklistSource>,
        recorder: Arc<dyn StatusRecorder>,
        metrics: Arc<dyn MetricsPublisher>,
    ) -> Self {
        Self {
            owners,
            range_source,
            blocklist,
            recorder,
            metrics,
            evaluator: MembershipEvaluator::new(),
        }
    }

    pub fn owners(&self) -> &[OwnerSource] {
        &self.owners
    }

    pub async fn execute(&self) -> CycleReport {
        self.execute_at(CycleTimestamp::now()).await
    }

    /// Run a cycle whose records all carry `timestamp`.
    #[instrument(skip_all, fields(timestamp = %timestamp))]
    pub async fn execute_at(&self, timestamp: CycleTimestamp) -> CycleReport {
        let snapshot = self.fetch_snapshot().await;

        let cycle_id = match self.recorder.begin_cycle(&timestamp).await {
            Ok(id) => Some(id),
            Err(e) => {
                error!(error = %e, "Failed to open cycle; records of this cycle are not persisted");
                None
            }
        };

        let mut owners = Vec::with_capacity(self.owners.len());
        for source in &self.owners {
            owners.push(
                self.evaluate_owner(source, &snapshot, cycle_id, &timestamp)
                    .await,
            );
        }

        let report = CycleReport {
            timestamp,
            cycle_id,
            blocklist_available: snapshot.is_available(),
            blocklist_entries: snapshot.len(),
            blocklist_invalid_entries: snapshot.invalid_entries(),
            owners,
        };

        self.metrics.record_cycle(&report);

        info!(
            owners = report.owners.len(),
            blocklist_entries = report.blocklist_entries,
            persistence_failures = report.persistence_failures(),
            "Evaluation cycle completed"
        );

        report
    }

    async fn fetch_snapshot(&self) -> BlocklistSnapshot {
        match self.blocklist.fetch().await {
            Ok(entries) => {
                let snapshot = BlocklistSnapshot::from_entries(entries);
                if snapshot.invalid_entries() > 0 {
                    warn!(
                        invalid = snapshot.invalid_entries(),
                        "Skipped blocklist entries that are not IP addresses"
                    );
                }
                snapshot
            }
            Err(e) => {
                warn!(error = %e, "Blocklist unavailable; evaluating against an empty snapshot");
                BlocklistSnapshot::unavailable()
            }
        }
    }

    async fn evaluate_owner(
        &self,
        source: &OwnerSource,
        snapshot: &BlocklistSnapshot,
        cycle_id: Option<CycleId>,
        timestamp: &CycleTimestamp,
    ) -> OwnerReport {
        let code = source.owner_code();

        let (ranges, ranges_loaded) = match self.range_source.load(source).await {
            Ok(ranges) => (ranges, true),
            Err(e) => {
                warn!(owner = %code, path = %source.path, error = %e, "Range source unavailable; owner has no ranges this cycle");
                (Vec::new(), false)
            }
        };

        let owner = Owner::new(code.clone(), ranges);
        let evaluation = self.evaluator.evaluate(&owner, snapshot);

        let mut records_persisted = 0;
        let mut records_failed = 0;

        if let Some(cycle_id) = cycle_id {
            for ip in &evaluation.matched {
                let record = MatchRecord::blocked(cycle_id, timestamp.clone(), code.clone(), ip);
                match self.recorder.append(&record).await {
                    Ok(()) => records_persisted += 1,
                    Err(e) => {
                        error!(owner = %code, address = %record.address, error = %e, "Failed to append match record");
                        records_failed += 1;
                    }
                }
            }

            if let Err(e) = self
                .recorder
                .record_counts(cycle_id, timestamp, &evaluation.counts)
                .await
            {
                error!(owner = %code, error = %e, "Failed to append owner counts");
                records_failed += 1;
            }
        }

        self.metrics.publish(&evaluation.counts);

        info!(
            owner = %code,
            blocked = %evaluation.counts.blocked_count,
            not_blocked = %evaluation.counts.not_blocked_count,
            "Updated metrics"
        );

        OwnerReport {
            counts: evaluation.counts,
            matched: evaluation.matched.iter().map(host_notation).collect(),
            ranges_loaded,
            records_persisted,
            records_failed,
        }
    }
}
