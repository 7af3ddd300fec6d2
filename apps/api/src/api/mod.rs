use axum::{Router, middleware, routing::get};

pub mod blogs;
pub mod health;
pub mod projects;
pub mod services;
pub mod teams;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// This function takes a reference to AppState and initializes all services.
/// Returns a stateless Router (all sub-routers have state already applied).
///
/// In serverless mode the resource routers are wrapped in the connection
/// guard; `/api/health` stays outside the guard so status reporting never
/// triggers an establishment.
pub fn routes(state: &crate::state::AppState) -> Router {
    let mut resources = Router::new()
        .nest("/blogs", blogs::router(state))
        .nest("/projects", projects::router(state))
        .nest("/services", services::router(state))
        .nest("/teams", teams::router(state));

    if state.config.runtime.is_serverless() {
        resources = resources.layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::ensure_db_connected,
        ));
    }

    let health = Router::new()
        .route("/health", get(health::health_handler))
        .with_state(state.clone());

    resources.merge(health)
}

/// Creates a router with the /ready endpoint that performs an actual
/// database ping through the cached handle.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
