//! planets_server — standalone REST server for planets.
//!
//! See `config` for the environment variables it reads.

use std::sync::Arc;

use anyhow::Context;
use planets_core::{InMemoryPlanetStore, PlanetService, PlanetServiceImpl, PlanetStore};
use planets_postgres::{connect, initialize_schema, PgPlanetStore};
use planets_server::config::ServerConfig;
use planets_server::router::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,planets_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env();

    let store: Arc<dyn PlanetStore> = match &config.database {
        Some(pg) => {
            let pool = connect(pg).await.context("failed to connect to database")?;
            initialize_schema(&pool).await?;
            Arc::new(PgPlanetStore::new(pool))
        }
        None => {
            tracing::warn!("No database URL configured, using in-memory store");
            Arc::new(InMemoryPlanetStore::new())
        }
    };

    let service: Arc<dyn PlanetService> = Arc::new(PlanetServiceImpl::new(store));
    let app = build_router(service);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("planets_server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("planets_server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
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
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
