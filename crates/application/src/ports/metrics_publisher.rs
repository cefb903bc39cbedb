use blockscope_domain::{CycleReport, OwnerCounts};

/// Gauge sink for per-owner counts.
///
/// `publish` overwrites the previous values for the owner; calling it again
/// with the same owner never accumulates.
pub trait MetricsPublisher: Send + Sync {
    fn publish(&self, counts: &OwnerCounts);

    /// Cycle-level bookkeeping (snapshot size, failures). Optional.
    fn record_cycle(&self, _report: &CycleReport) {}
}
