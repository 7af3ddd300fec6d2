use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod middleware;
mod openapi;
mod state;

use config::Config;
use database::mongodb::ConnectionManager;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = ConnectionManager::new(config.mongodb.clone());

    if config.runtime.is_server() {
        // Long-running mode: connect before the listener binds. A failure
        // here is fatal; the process must not serve requests without a
        // database.
        let handle = db
            .ensure_connected()
            .await
            .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;
        info!(host = %handle.host, database = %handle.database_name, "MongoDB connected");
    } else {
        // Serverless mode: the connection guard middleware establishes (and
        // reuses) the connection per request.
        info!("Serverless runtime: deferring MongoDB connection to the first request");
    }

    let state = AppState { config, db };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router =
        axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.http).await?;

    // Merge health endpoints into the app
    // - /health: liveness check with app name/version
    // - /ready: readiness check with an actual database ping
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting atelier API with graceful shutdown (30s timeout)");

    // State moves into the cleanup future so shutdown can close the manager
    let cleanup_state = state.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connection");
            cleanup_state.db.shutdown().await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Atelier API shutdown complete");
    Ok(())
}
