use anyhow::{Context, Result};
use api::{AppState, Config};
use clap::Parser;
use services::{AppServices, Clock};
use storage::repository::Storage;
use storage::sqlite::SqliteRepository;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    // The database handle lives for the whole process and is closed after the
    // server has drained.
    let sqlite = if config.in_memory {
        info!("using in-memory storage");
        None
    } else {
        if let Some(dir) = config.database_dir() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating database directory {}", dir.display()))?;
        }
        let url = config.database_url();
        let repo = SqliteRepository::connect(&url)
            .await
            .with_context(|| format!("connecting to {url}"))?;
        repo.migrate().await.context("running migrations")?;
        Some(repo)
    };
    let storage = sqlite
        .as_ref()
        .map_or_else(Storage::in_memory, Storage::from_sqlite);

    let services = AppServices::new(&storage, Clock::system());
    let app = api::router(AppState::new(services), config.cors_layer());

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding {}:{}", config.host, config.port))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(repo) = sqlite {
        repo.close().await;
    }
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutdown signal received");
}
