mod app;
mod config;
mod handlers;
mod models;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use shelf_core::storage::StoreClient;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState};

/// Shelf - REST service for storing object records
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // A failed bootstrap must abort before the listener binds: the service
    // never accepts traffic against a table that is not ready.
    let store = build_store(&config).await?;
    let state = AppState::new(store);

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the DynamoDB-backed store, provisioning the table first.
#[cfg(feature = "dynamodb")]
async fn build_store(config: &Config) -> Result<Arc<dyn StoreClient>> {
    use crate::storage::dynamodb::{bootstrap, create_client, DynamoStore};

    let client = create_client(config).await;

    tracing::info!(table = %config.table_name, "Ensuring DynamoDB table exists");
    bootstrap::ensure_table(&client, &config.table_name, &config.bootstrap_options()).await?;

    Ok(Arc::new(DynamoStore::new(client)))
}

/// Build the in-memory store (no bootstrap required).
#[cfg(feature = "inmemory")]
async fn build_store(_config: &Config) -> Result<Arc<dyn StoreClient>> {
    use crate::storage::inmemory::MemoryStore;

    tracing::warn!("Using in-memory storage; data is lost on restart");
    Ok(Arc::new(MemoryStore::new()))
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
