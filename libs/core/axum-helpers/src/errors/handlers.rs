use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler for unmatched routes.
///
/// Echoes the offending path back so misrouted clients can spot typos.
pub async fn not_found(uri: Uri) -> Response {
    let body = Json(ErrorResponse {
        code: ErrorCode::NotFound.code(),
        error: ErrorCode::NotFound.as_str().to_string(),
        message: format!("Route {} not found", uri.path()),
        details: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
