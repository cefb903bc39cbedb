use blockscope_application::ports::MetricsPublisher;
use blockscope_domain::{CycleReport, DomainError, OwnerCounts};
use prometheus::{Counter, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use tracing::error;

const NAMESPACE: &str = "blockscope";

/// Prometheus-backed metrics for the evaluation cycle.
///
/// Each instance owns its own `Registry`; nothing is registered globally.
/// The two per-owner gauge families keep the names existing dashboards
/// scrape (`blocked_ip_count`, `not_blocked_ip_count`).
#[derive(Clone)]
pub struct PrometheusMetrics {
    registry: Registry,

    /// Blocked host addresses per owner.
    pub blocked: GaugeVec,
    /// Owned addresses not on the blocklist, per owner.
    pub not_blocked: GaugeVec,

    /// Valid addresses in the last snapshot.
    pub blocklist_entries: Gauge,
    /// Entries of the last snapshot that were not IP addresses.
    pub blocklist_invalid_entries: Gauge,
    /// Cycles that ran against an unavailable blocklist.
    pub blocklist_fetch_failures: Counter,
    /// Writes rejected by the status store.
    pub persistence_failures: Counter,
    /// Completed evaluation cycles.
    pub cycles_total: Counter,
    /// Unix time of the last completed cycle.
    pub last_cycle_timestamp: Gauge,
}

impl PrometheusMetrics {
    pub fn new() -> Result<Self, DomainError> {
        Self::build().map_err(|e| DomainError::Metrics(e.to_string()))
    }

    fn build() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let blocked = GaugeVec::new(
            Opts::new("blocked_ip_count", "Number of blocked IP /32"),
            &["owner"],
        )?;
        let not_blocked = GaugeVec::new(
            Opts::new("not_blocked_ip_count", "Number of not blocked IP /32"),
            &["owner"],
        )?;
        let blocklist_entries = Gauge::with_opts(
            Opts::new(
                "blocklist_entries",
                "Valid addresses in the last blocklist snapshot.",
            )
            .namespace(NAMESPACE),
        )?;
        let blocklist_invalid_entries = Gauge::with_opts(
            Opts::new(
                "blocklist_invalid_entries",
                "Entries of the last blocklist snapshot that were not IP addresses.",
            )
            .namespace(NAMESPACE),
        )?;
        let blocklist_fetch_failures = Counter::with_opts(
            Opts::new(
                "blocklist_fetch_failures_total",
                "Cycles evaluated against an unavailable blocklist.",
            )
            .namespace(NAMESPACE),
        )?;
        let persistence_failures = Counter::with_opts(
            Opts::new(
                "persistence_failures_total",
                "Writes rejected by the status store.",
            )
            .namespace(NAMESPACE),
        )?;
        let cycles_total = Counter::with_opts(
            Opts::new("evaluation_cycles_total", "Completed evaluation cycles.")
                .namespace(NAMESPACE),
        )?;
        let last_cycle_timestamp = Gauge::with_opts(
            Opts::new(
                "last_cycle_timestamp_seconds",
                "Unix time of the last completed evaluation cycle.",
            )
            .namespace(NAMESPACE),
        )?;

        registry.register(Box::new(blocked.clone()))?;
        registry.register(Box::new(not_blocked.clone()))?;
        registry.register(Box::new(blocklist_entries.clone()))?;
        registry.register(Box::new(blocklist_invalid_entries.clone()))?;
        registry.register(Box::new(blocklist_fetch_failures.clone()))?;
        registry.register(Box::new(persistence_failures.clone()))?;
        registry.register(Box::new(cycles_total.clone()))?;
        registry.register(Box::new(last_cycle_timestamp.clone()))?;

        Ok(Self {
            registry,
            blocked,
            not_blocked,
            blocklist_entries,
            blocklist_invalid_entries,
            blocklist_fetch_failures,
            persistence_failures,
            cycles_total,
            last_cycle_timestamp,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render every registered metric in the text exposition format.
    pub fn render(&self) -> Result<String, DomainError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| DomainError::Metrics(format!("encoding metrics: {}", e)))?;

        String::from_utf8(buffer)
            .map_err(|e| DomainError::Metrics(format!("converting metrics to string: {}", e)))
    }
}

impl MetricsPublisher for PrometheusMetrics {
    fn publish(&self, counts: &OwnerCounts) {
        let owner = counts.owner_code.as_ref();
        match (
            self.blocked.get_metric_with_label_values(&[owner]),
            self.not_blocked.get_metric_with_label_values(&[owner]),
        ) {
            // u128 → f64 loses precision for huge IPv6 totals but never wraps
            (Ok(blocked), Ok(not_blocked)) => {
                blocked.set(counts.blocked_count as f64);
                not_blocked.set(counts.not_blocked_count as f64);
            }
            (Err(e), _) | (_, Err(e)) => {
                error!(owner, error = %e, "Failed to resolve owner gauges");
            }
        }
    }

    fn record_cycle(&self, report: &CycleReport) {
        self.cycles_total.inc();
        self.blocklist_entries.set(report.blocklist_entries as f64);
        self.blocklist_invalid_entries
            .set(report.blocklist_invalid_entries as f64);

        if !report.blocklist_available {
            self.blocklist_fetch_failures.inc();
        }

        let failures = report.persistence_failures();
        if failures > 0 {
            self.persistence_failures.inc_by(failures as f64);
        }

        if let Some(secs) = report.timestamp.unix_seconds() {
            self.last_cycle_timestamp.set(secs as f64);
        }
    }
}
