//! # Blockscope
//!
//! Periodically checks which addresses of the configured owners appear on a
//! public blocklist, records every match and exports per-owner gauges.

mod bootstrap;
mod di;
mod server;

use blockscope_domain::CliOverrides;
use blockscope_jobs::{EvaluationJob, JobRunner};
use clap::Parser;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "blockscope")]
#[command(version)]
#[command(about = "Tracks owner address ranges against a public blocklist")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address for both listeners
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Query API port
    #[arg(short = 'p', long)]
    api_port: Option<u16>,

    /// Prometheus metrics port
    #[arg(short = 'm', long)]
    metrics_port: Option<u16>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Seconds between evaluation cycles
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            api_port: self.api_port,
            metrics_port: self.metrics_port,
            database_path: self.database.clone(),
            interval_secs: self.interval,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Blockscope starting");

    let pool = bootstrap::init_database(&config.database).await?;

    // Relative owner files are looked up next to the config file
    let base_dir = cli
        .config
        .as_deref()
        .and_then(|p| Path::new(p).parent())
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf);

    let adapters = di::Adapters::new(&config, base_dir)?;
    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&config, &repos, &adapters);

    let api_listener =
        server::bind_listener(&config.server.bind_address, config.server.api_port).await?;
    let metrics_listener = if config.metrics.enabled {
        Some(server::bind_listener(&config.metrics.bind_address, config.metrics.port).await?)
    } else {
        info!("Metrics listener disabled");
        None
    };

    let shutdown = CancellationToken::new();

    let job_handles = JobRunner::new()
        .with_evaluation(
            EvaluationJob::new(use_cases.run_cycle.clone())
                .with_interval(config.schedule.interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let api_task = tokio::spawn(server::start_api_server(
        api_listener,
        use_cases.app_state(),
        config.server.cors_allowed_origins.clone(),
        shutdown.clone(),
    ));

    let metrics_task = metrics_listener.map(|listener| {
        tokio::spawn(server::start_metrics_server(
            listener,
            adapters.metrics_state(),
            shutdown.clone(),
        ))
    });

    info!("Blockscope ready, press Ctrl+C to stop");

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_token.cancel();
            }
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
    });

    let api_result = api_task.await?;
    if let Err(e) = &api_result {
        error!(error = %e, "Query API server failed");
        shutdown.cancel();
    }

    if let Some(task) = metrics_task {
        if let Err(e) = task.await? {
            error!(error = %e, "Metrics server failed");
        }
    }

    for handle in job_handles {
        let cycles = handle.await?;
        info!(cycles, "Evaluation job stopped");
    }

    api_result?;
    info!("Blockscope stopped");
    Ok(())
}
