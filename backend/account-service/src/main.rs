/// Account Service Main Entry Point
///
/// Starts the HTTP server with:
/// - PostgreSQL connection pool
/// - Database migrations
/// - Account lifecycle service and token issuer
use std::sync::Arc;

use account_service::config::Settings;
use account_service::db::PgAccountStore;
use account_service::http::{build_router, AppState};
use account_service::security::TokenIssuer;
use account_service::services::AccountService;
use anyhow::{Context, Result};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "account_service=info,info".into()),
        )
        .with_target(false)
        .json()
        .init();

    info!("Starting Account Service");

    let settings = Settings::load().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let db_pool = db_pool::create_pool(&settings.database)
        .await
        .context("Failed to connect to PostgreSQL")?;
    info!(
        max_connections = settings.database.max_connections,
        "Database pool initialized"
    );

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations completed");

    let state = AppState {
        service: AccountService::new(Arc::new(PgAccountStore::new(db_pool))),
        tokens: TokenIssuer::new(&settings.auth),
    };

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Account Service stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        return;
    }

    info!("Shutdown signal received");
}
