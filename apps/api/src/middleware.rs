use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;

use crate::state::AppState;

/// Connection guard for serverless mode.
///
/// Runs before every resource handler: a warm instance finds the cached
/// handle and pays no I/O; a cold one triggers exactly one establishment that
/// concurrent requests share. A failure is fatal to this request only — the
/// process stays alive and the next invocation retries naturally.
pub async fn ensure_db_connected(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state.db.ensure_connected().await {
        Ok(_) => next.run(request).await,
        Err(e) => {
            tracing::error!(error = %e, "refusing request: database connection unavailable");

            let message = if state.config.environment.is_production() {
                "Database connection unavailable".to_string()
            } else {
                // outside production the cause helps local debugging
                format!("Database connection unavailable: {}", e)
            };
            AppError::ServiceUnavailable(message).into_response()
        }
    }
}
