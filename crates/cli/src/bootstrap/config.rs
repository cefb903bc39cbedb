use blockscope_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        api_port = config.server.api_port,
        metrics_port = config.metrics.port,
        bind = %config.server.bind_address,
        owners = config.owners.len(),
        interval_secs = config.schedule.interval_secs,
        "Configuration loaded"
    );

    Ok(config)
}
