use axum::Router;
use domain_services::{MongoServiceRepository, OfferingService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoServiceRepository::new(state.db.clone());
    let service = OfferingService::new(repository);
    handlers::router(service)
}
