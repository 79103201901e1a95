//! HTTP server lifecycle management.
//!
//! Provides [`start_server`] which binds to a TCP port and runs the
//! Axum server until the given shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use duckrace_core::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::{build_router, build_router_with_static};
use crate::state::AppState;

/// Start the roster HTTP server.
///
/// Binds to the configured host (an IP literal or a resolvable name
/// such as `localhost`) and port, builds the router (with static
/// files when `static_dir` is set), and serves requests until `shutdown`
/// completes. In-flight requests are allowed to finish.
///
/// # Errors
///
/// Returns an error if the host cannot be resolved, the TCP listener
/// cannot bind, or the server encounters a fatal I/O error.
pub async fn start_server(
    config: &ServerConfig,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let router = match &config.static_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Serving static files under /static");
            build_router_with_static(state, dir)
        }
        None => build_router(state),
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            ServerError::Bind(format!("bind failed on {}:{}: {e}", config.host, config.port))
        })?;
    let addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))?;

    info!(%addr, "Duck race server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    info!("Duck race server stopped");
    Ok(())
}

/// Errors that can occur when starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_host_is_a_bind_error() {
        let config = ServerConfig {
            host: String::from("not an address"),
            ..ServerConfig::default()
        };
        let result = start_server(&config, Arc::new(AppState::new()), async {}).await;
        assert!(matches!(result, Err(ServerError::Bind(_))));
    }

    #[tokio::test]
    async fn stops_when_shutdown_resolves() {
        let config = ServerConfig {
            host: String::from("127.0.0.1"),
            port: 0,
            static_dir: None,
        };
        let result = start_server(&config, Arc::new(AppState::new()), async {}).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn binds_to_hostname() {
        let config = ServerConfig {
            host: String::from("localhost"),
            port: 0,
            static_dir: None,
        };
        let result = start_server(&config, Arc::new(AppState::new()), async {}).await;
        assert!(result.is_ok(), "localhost should resolve: {result:?}");
    }
}
