use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TeamError {
    #[error("Team member not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] MongoError),
}

pub type TeamResult<T> = Result<T, TeamError>;

impl From<mongodb::error::Error> for TeamError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Database(MongoError::from(err))
    }
}

impl From<TeamError> for AppError {
    fn from(err: TeamError) -> Self {
        match err {
            TeamError::NotFound(id) => AppError::NotFound(format!("Team member {} not found", id)),
            TeamError::Validation(msg) => AppError::BadRequest(msg),
            TeamError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
