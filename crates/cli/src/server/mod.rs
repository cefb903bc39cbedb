pub mod api;
pub mod metrics;

pub use api::start_api_server;
pub use metrics::start_metrics_server;

use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// `host` is a bare IPv4 or IPv6 address (`0.0.0.0`, `::`).
pub fn socket_addr(host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let ip: IpAddr = host
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {}: {}", host, e))?;

    Ok(SocketAddr::new(ip, port))
}

/// Bind up front so a taken port fails startup.
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    let socket_addr = socket_addr(host, port)?;

    TcpListener::bind(socket_addr)
        .await
        .map_err(|e| anyhow::anyhow!("cannot bind {}: {}", socket_addr, e))
}
