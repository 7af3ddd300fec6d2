use axum::Router;
use domain_projects::{MongoProjectRepository, ProjectService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoProjectRepository::new(state.db.clone());
    let service = ProjectService::new(repository);
    handlers::router(service)
}
