//! Closet API
//!
//! HTTP boundary for the closet: inventory CRUD and outfit recommendations
//! over JSON. Requests are validated here before they reach the store or the
//! engine.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod wire;

use closet_engine::{EngineError, Stylist};
use closet_store::{MemoryStore, SqliteStore, StoreError};
use config::{ApiConfig, ConfigError, StoreBackend, StoreConfig};
use handlers::{create_router, AppState, SharedStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Store could not be opened
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Engine configuration rejected
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. Logs go to
/// stderr. Calling this twice is harmless.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Open the configured inventory backend
pub fn open_store(config: &StoreConfig) -> Result<SharedStore, ServerError> {
    match config.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store; the closet is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Sqlite => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| ConfigError::MissingField("store.path".to_string()))?;
            Ok(Arc::new(SqliteStore::new(path)?))
        }
    }
}

/// Build application state from configuration
pub fn build_state(config: &ApiConfig) -> Result<AppState, ServerError> {
    let store = open_store(&config.store)?;
    let stylist = Stylist::new(&config.engine)?;
    Ok(AppState::new(store, stylist))
}

/// Start the HTTP server
///
/// Opens the store, builds the stylist, and serves until Ctrl-C.
pub async fn start_server(config: ApiConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting closet API");
    info!("Bind address: {}", config.bind_addr());
    info!("Store backend: {:?}", config.store.backend);
    info!(
        "Cold threshold: {}°C, outerwear: {:?}",
        config.engine.cold_threshold_c, config.engine.outerwear
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Closet API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
