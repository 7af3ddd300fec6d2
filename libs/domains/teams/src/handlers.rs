use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TeamResult;
use crate::models::{CreateTeamMember, TeamFilter, TeamMember, UpdateTeamMember};
use crate::repository::TeamRepository;
use crate::service::TeamService;

const TAG: &str = "teams";

/// OpenAPI documentation for the Teams API
#[derive(OpenApi)]
#[openapi(
    paths(list_members, add_member, get_member, update_member, remove_member),
    components(
        schemas(TeamMember, CreateTeamMember, UpdateTeamMember, TeamFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Team member endpoints")
    )
)]
pub struct ApiDoc;

/// Create the teams router with all HTTP endpoints
pub fn router<R: TeamRepository + 'static>(service: TeamService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_members).post(add_member))
        .route(
            "/{id}",
            get(get_member).put(update_member).delete(remove_member),
        )
        .with_state(shared_service)
}

/// List team members with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(TeamFilter),
    responses(
        (status = 200, description = "List of team members", body = Vec<TeamMember>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_members<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    Query(filter): Query<TeamFilter>,
) -> TeamResult<Json<Vec<TeamMember>>> {
    let members = service.list_members(filter).await?;
    Ok(Json(members))
}

/// Add a team member
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTeamMember,
    responses(
        (status = 201, description = "Team member added successfully", body = TeamMember),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_member<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTeamMember>,
) -> TeamResult<impl IntoResponse> {
    let member = service.add_member(input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// Get a team member by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Team member ID")
    ),
    responses(
        (status = 200, description = "Team member found", body = TeamMember),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_member<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
) -> TeamResult<Json<TeamMember>> {
    let member = service.get_member(id).await?;
    Ok(Json(member))
}

/// Update a team member
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Team member ID")
    ),
    request_body = UpdateTeamMember,
    responses(
        (status = 200, description = "Team member updated successfully", body = TeamMember),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_member<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateTeamMember>,
) -> TeamResult<Json<TeamMember>> {
    let member = service.update_member(id, input).await?;
    Ok(Json(member))
}

/// Remove a team member
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Team member ID")
    ),
    responses(
        (status = 204, description = "Team member removed successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_member<R: TeamRepository>(
    State(service): State<Arc<TeamService<R>>>,
    UuidPath(id): UuidPath,
) -> TeamResult<impl IntoResponse> {
    service.remove_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
