use blockscope_api::MetricsState;
use blockscope_domain::Config;
use blockscope_infrastructure::metrics::PrometheusMetrics;
use blockscope_infrastructure::sources::{FileRangeSource, HttpBlocklistSource};
use std::path::PathBuf;
use std::sync::Arc;

/// Outbound adapters: range files, the blocklist endpoint, the metrics registry.
pub struct Adapters {
    pub range_source: Arc<FileRangeSource>,
    pub blocklist: Arc<HttpBlocklistSource>,
    pub metrics: Arc<PrometheusMetrics>,
}

impl Adapters {
    pub fn new(config: &Config, base_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let range_source = match base_dir {
            Some(dir) => FileRangeSource::new().with_base_dir(dir),
            None => FileRangeSource::new(),
        };

        Ok(Self {
            range_source: Arc::new(range_source),
            blocklist: Arc::new(HttpBlocklistSource::new(&config.blocklist)?),
            metrics: Arc::new(PrometheusMetrics::new()?),
        })
    }

    pub fn metrics_state(&self) -> MetricsState {
        MetricsState {
            metrics: self.metrics.clone(),
        }
    }
}
