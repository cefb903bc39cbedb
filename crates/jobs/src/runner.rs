use crate::EvaluationJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_evaluation(EvaluationJob::new(run_cycle).with_interval(300))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    evaluation: Option<EvaluationJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { evaluation: None }
    }

    pub fn with_evaluation(mut self, job: EvaluationJob) -> Self {
        self.evaluation = Some(job);
        self
    }

    /// Start all registered background jobs and return their handles.
    pub async fn start(self) -> Vec<JoinHandle<u64>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();

        if let Some(job) = self.evaluation {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
