use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Atelier API",
        version = "0.1.0",
        description = "CRUD API for the agency site: blogs, projects, services, and teams"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/blogs", api = domain_blogs::handlers::ApiDoc),
        (path = "/projects", api = domain_projects::handlers::ApiDoc),
        (path = "/services", api = domain_services::handlers::ApiDoc),
        (path = "/teams", api = domain_teams::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
