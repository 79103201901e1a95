//! Duck race backend binary.
//!
//! Loads configuration, initializes structured logging, creates the
//! roster store with its four seed ducks, and serves the roster API
//! until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `duckrace-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Create the seeded roster store
//! 4. Serve HTTP until shutdown is requested

mod error;

use std::path::Path;
use std::sync::Arc;

use duckrace_api::AppState;
use duckrace_core::{AppConfig, LogFormat, LoggingConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Default config file, relative to the working directory.
const CONFIG_PATH: &str = "duckrace-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is unreadable or the server
/// cannot bind.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Load configuration. Logging is not up yet, so remember whether
    //    the file was found and report it afterwards.
    let config_path = Path::new(CONFIG_PATH);
    let config_found = config_path.exists();
    let config = if config_found {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::parse("")?
    };

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("duckrace-server starting");
    if config_found {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        static_dir = ?config.server.static_dir,
        "Server configuration"
    );

    // 3. Create the roster store.
    let state = Arc::new(AppState::new());
    {
        let store = state.store.read().await;
        info!(ducks = store.len(), race_duration = store.settings().race_duration, "Roster seeded");
    }

    // 4. Serve until Ctrl-C.
    duckrace_api::start_server(&config.server, state, shutdown_signal()).await?;

    info!("duckrace-server shutdown complete");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

/// Resolve when the process receives `Ctrl-C`.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
        return;
    }
    info!("Shutdown requested");
}
