pub mod prometheus;

pub use self::prometheus::PrometheusMetrics;
