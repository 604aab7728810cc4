//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database connections, migrations and the Axum
//! server lifecycle.

use crate::application::services::{AnalyticsService, UrlService};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{AnalyticsRepository, UrlRepository};
use crate::infrastructure::persistence::{
    InMemoryUrlRepository, PgAnalyticsRepository, PgUrlRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the configured storage backend (PostgreSQL pool + migrations, or in-memory)
/// - URL and analytics services
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (url_repository, analytics_repository) = open_repositories(&config).await?;

    let state = build_state(&config, url_repository, analytics_repository);
    let app = app_router(state, &config.cors_allowed_origins);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wires services over the given repositories.
pub fn build_state(
    config: &Config,
    url_repository: Arc<dyn UrlRepository>,
    analytics_repository: Arc<dyn AnalyticsRepository>,
) -> AppState {
    let url_service = UrlService::new(
        url_repository,
        RandomCodeGenerator::new(config.code_length),
        config.base_url.clone(),
    )
    .with_max_attempts(config.max_allocation_attempts);

    let analytics_service = AnalyticsService::new(analytics_repository);

    AppState::new(Arc::new(url_service), Arc::new(analytics_service))
}

async fn open_repositories(
    config: &Config,
) -> Result<(Arc<dyn UrlRepository>, Arc<dyn AnalyticsRepository>)> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = Arc::new(connect_pool(config).await?);
            let urls: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(pool.clone()));
            let analytics: Arc<dyn AnalyticsRepository> =
                Arc::new(PgAnalyticsRepository::new(pool));
            Ok((urls, analytics))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let repository = Arc::new(InMemoryUrlRepository::new());
            let urls: Arc<dyn UrlRepository> = repository.clone();
            let analytics: Arc<dyn AnalyticsRepository> = repository;
            Ok((urls, analytics))
        }
    }
}

/// Opens the PostgreSQL pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails or
/// a migration cannot be applied.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config.require_database_url()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
