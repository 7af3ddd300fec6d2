//! Application-specific health handlers backed by the connection manager.

use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use chrono::Utc;
use database::mongodb::{ConnectionState, check_health_detailed};
use serde_json::json;

/// Database-aware health endpoint at `/api/health`.
///
/// Reads the manager's status snapshot only — reporting must never trigger an
/// establishment, and a down database yields a 200 with `"degraded"` rather
/// than an error.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.db.status();
    let status = if database.state == ConnectionState::Connected {
        "ok"
    } else {
        "degraded"
    };

    Json(json!({
        "status": status,
        "database": database,
        "timestamp": Utc::now(),
    }))
}

/// Readiness check endpoint that pings the database.
///
/// Probes through the cached handle only; when nothing is connected the check
/// fails without attempting an establishment.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            match state.db.handle() {
                Some(handle) => {
                    let status = check_health_detailed(&handle).await;
                    if status.healthy {
                        Ok(())
                    } else {
                        Err(status
                            .message
                            .unwrap_or_else(|| "Database ping failed".to_string()))
                    }
                }
                None => Err("Database is not connected".to_string()),
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
