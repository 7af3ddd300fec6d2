use axum::Router;
use domain_blogs::{BlogService, MongoBlogRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoBlogRepository::new(state.db.clone());
    let service = BlogService::new(repository);
    handlers::router(service)
}
