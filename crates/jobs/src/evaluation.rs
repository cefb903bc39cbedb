use blockscope_application::use_cases::RunEvaluationCycleUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Periodic evaluation loop.
///
/// A cycle runs as soon as the job starts, then the job sleeps for the
/// interval. Shutdown is only observed while sleeping, so a cycle in
/// progress always finishes.
pub struct EvaluationJob {
    use_case: Arc<RunEvaluationCycleUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl EvaluationJob {
    pub fn new(use_case: Arc<RunEvaluationCycleUseCase>) -> Self {
        Self {
            use_case,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    /// Spawn the loop. The handle resolves to the number of cycles run.
    pub async fn start(self: Arc<Self>) -> JoinHandle<u64> {
        info!(
            interval_secs = self.interval_secs,
            owners = self.use_case.owners().len(),
            "Starting evaluation job"
        );

        tokio::spawn(async move {
            let interval = Duration::from_secs(self.interval_secs);
            let mut cycles: u64 = 0;

            loop {
                let report = self.use_case.execute().await;
                cycles += 1;
                info!(
                    cycle = cycles,
                    timestamp = %report.timestamp,
                    blocklist_available = report.blocklist_available,
                    "EvaluationJob: cycle finished"
                );

                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(cycles, "EvaluationJob: shutting down");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {}
                }
            }

            cycles
        })
    }
}
