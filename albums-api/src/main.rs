//! albums-api - REST service over the in-memory album catalog
//!
//! Serves list/get/search/create/update/delete under `/albums`, plus `/`
//! (API information) and `/health`. State lives only for the process
//! lifetime; every start begins from the six-album seed set.

use std::path::PathBuf;

use albums_api::{build_router, AppState};
use albums_common::config::ServiceConfig;
use albums_common::Catalog;
use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for albums-api
#[derive(Parser, Debug)]
#[command(name = "albums-api")]
#[command(about = "Album catalog REST service")]
#[command(version)]
struct Args {
    /// Address to bind (overrides config file)
    #[arg(long, env = "ALBUMS_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Config file path (falls back to ALBUMS_CONFIG, then the platform default)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing starts so its log level can seed the filter
    let config = ServiceConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(args.host, args.port);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("albums_api={0},albums_common={0},tower_http=info", config.log_level).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Album API (albums-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let catalog = Catalog::seeded();
    info!("Catalog seeded with {} albums", catalog.len());

    let app = build_router(AppState::new(catalog));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("albums-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
