use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use irail_mcp::cache::CachedIrailClient;
use irail_mcp::config::{ConfigError, ServerConfig, Transport};
use irail_mcp::irail::{IrailClient, IrailError};
use irail_mcp::mcp::{McpServer, serve_http, serve_stdio};
use irail_mcp::stations::{StationError, StationIndex};
use irail_mcp::tools::ToolContext;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stations(#[from] StationError),

    #[error(transparent)]
    Irail(#[from] IrailError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries protocol messages, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irail_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "irail-mcp failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?config.transport,
        base_url = %config.irail.base_url,
        "starting irail-mcp"
    );

    // Build the index up front so a broken dataset fails at startup.
    let stations = match &config.stations_path {
        Some(path) => Arc::new(StationIndex::load(path)?),
        None => StationIndex::shared()?,
    };

    let client = IrailClient::new(config.irail.clone())?;
    let irail = Arc::new(CachedIrailClient::new(client, &config.cache));
    let server = McpServer::new(ToolContext::new(stations, irail));

    match config.transport {
        Transport::Stdio => serve_stdio(server).await?,
        Transport::Http => {
            let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
            serve_http(server, listener).await?;
        }
    }

    Ok(())
}
