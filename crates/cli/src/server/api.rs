use blockscope_api::{cors_layer, create_api_routes, AppState};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_api_server(
    listener: TcpListener,
    state: AppState,
    cors_allowed_origins: Vec<String>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let app = create_api_routes(state)
        .layer(cors_layer(&cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    info!(bind_address = %listener.local_addr()?, "Query API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Query API stopped");
    Ok(())
}
