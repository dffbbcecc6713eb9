//! Closet API server
//!
//! Starts the HTTP server for closet inventory and outfit recommendations.

use anyhow::{Context, Result};
use clap::Parser;
use closet_api::{config::ApiConfig, init_tracing, start_server};
use std::path::PathBuf;
use tracing::warn;

/// Closet inventory and outfit recommendation service
#[derive(Debug, Parser)]
#[command(name = "closet-api", version)]
struct Cli {
    /// Load configuration from this TOML file
    #[arg(long, env = "CLOSET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured bind address
    #[arg(long)]
    bind_address: Option<String>,

    /// Override the configured bind port
    #[arg(long)]
    bind_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ApiConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ApiConfig::default(),
    };
    if let Some(address) = cli.bind_address {
        config.bind_address = address;
    }
    if let Some(port) = cli.bind_port {
        config.bind_port = port;
    }

    init_tracing(&config.log_level);
    if cli.config.is_none() {
        warn!("No config file specified, using defaults");
    }

    start_server(config).await.context("closet API failed")?;
    Ok(())
}
