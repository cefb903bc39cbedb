use blockscope_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG`, when set, takes precedence over `logging.level`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(filter);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!(
        format = %config.logging.format,
        "Logging initialized at level: {}", config.logging.level
    );
}
