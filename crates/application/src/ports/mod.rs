pub mod blocklist_source;
pub mod metrics_publisher;
pub mod range_source;
pub mod status_history;
pub mod status_recorder;

pub use blocklist_source::BlocklistSource;
pub use metrics_publisher::MetricsPublisher;
pub use range_source::RangeSource;
pub use status_history::StatusHistoryReader;
pub use status_recorder::StatusRecorder;
