//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, and the Axum server lifecycle.

use crate::api::middleware::cors;
use crate::config::Config;
use crate::infrastructure::persistence::PgUrlMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations (unless `RUN_MIGRATIONS=false`)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    let repository = Arc::new(PgUrlMappingRepository::new(Arc::new(pool)));
    let state = AppState::new(repository, config.base_url.clone());

    let app = app_router(
        state,
        cors::layer(&config.cors_allow_origin, config.cors_max_age_seconds),
    );

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

/// Resolves on Ctrl+C so in-flight requests can finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
