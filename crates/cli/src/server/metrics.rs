use blockscope_api::{create_metrics_routes, MetricsState};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_metrics_server(
    listener: TcpListener,
    state: MetricsState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(bind_address = %listener.local_addr()?, "Metrics listener started");

    axum::serve(listener, create_metrics_routes(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Metrics listener stopped");
    Ok(())
}
