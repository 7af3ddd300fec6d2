use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Blog not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] MongoError),
}

pub type BlogResult<T> = Result<T, BlogError>;

impl From<mongodb::error::Error> for BlogError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(MongoError::from(err))
    }
}

/// Convert BlogError to AppError for standardized error responses
impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(id) => AppError::NotFound(format!("Blog {} not found", id)),
            BlogError::Validation(msg) => AppError::BadRequest(msg),
            BlogError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
