use axum::Router;
use domain_teams::{MongoTeamRepository, TeamService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = MongoTeamRepository::new(state.db.clone());
    let service = TeamService::new(repository);
    handlers::router(service)
}
