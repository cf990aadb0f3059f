mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::Config,
    state::AppState,
    storage::PostgresContactRepository,
};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StorageBackend {
    /// PostgreSQL through a shared connection pool.
    Postgres,
    /// Process-local storage, lost on exit.
    Memory,
}

/// Contactbook - CRUD API for contacts
#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value = "postgres", env = "STORAGE")]
    storage: StorageBackend,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values from a local .env file never override the real environment
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contactbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let config = Config::from_env().context("Invalid configuration")?;

    // The pool lives for the whole process and is closed after shutdown
    let postgres = match cli.storage {
        StorageBackend::Postgres => {
            let repo = PostgresContactRepository::connect(&config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!(
                max_connections = config.max_connections,
                "Connected to PostgreSQL"
            );
            Some(repo)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on exit");
            None
        }
    };

    let state = match &postgres {
        Some(repo) => AppState::new(Arc::new(repo.clone())),
        None => AppState::in_memory(),
    };

    // Build the application router
    let app = create_app(state, config.request_timeout());

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

    if let Some(repo) = postgres {
        repo.close().await;
        tracing::info!("Connection pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
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
