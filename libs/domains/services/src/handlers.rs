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

use crate::error::ServiceResult;
use crate::models::{CreateService, ServiceFilter, ServiceOffering, UpdateService};
use crate::repository::ServiceRepository;
use crate::service::OfferingService;

const TAG: &str = "services";

/// OpenAPI documentation for the Services API
#[derive(OpenApi)]
#[openapi(
    paths(list_services, create_service, get_service, update_service, delete_service),
    components(
        schemas(ServiceOffering, CreateService, UpdateService, ServiceFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Service offering endpoints")
    )
)]
pub struct ApiDoc;

/// Create the services router with all HTTP endpoints
pub fn router<R: ServiceRepository + 'static>(service: OfferingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_services).post(create_service))
        .route(
            "/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
        .with_state(shared_service)
}

/// List service offerings with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ServiceFilter),
    responses(
        (status = 200, description = "List of service offerings", body = Vec<ServiceOffering>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_services<R: ServiceRepository>(
    State(service): State<Arc<OfferingService<R>>>,
    Query(filter): Query<ServiceFilter>,
) -> ServiceResult<Json<Vec<ServiceOffering>>> {
    let services = service.list_services(filter).await?;
    Ok(Json(services))
}

/// Create a new service offering
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateService,
    responses(
        (status = 201, description = "Service offering created successfully", body = ServiceOffering),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_service<R: ServiceRepository>(
    State(service): State<Arc<OfferingService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateService>,
) -> ServiceResult<impl IntoResponse> {
    let created = service.create_service(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a service offering by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Service offering ID")
    ),
    responses(
        (status = 200, description = "Service offering found", body = ServiceOffering),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_service<R: ServiceRepository>(
    State(service): State<Arc<OfferingService<R>>>,
    UuidPath(id): UuidPath,
) -> ServiceResult<Json<ServiceOffering>> {
    let offering = service.get_service(id).await?;
    Ok(Json(offering))
}

/// Update a service offering
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Service offering ID")
    ),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service offering updated successfully", body = ServiceOffering),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_service<R: ServiceRepository>(
    State(service): State<Arc<OfferingService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateService>,
) -> ServiceResult<Json<ServiceOffering>> {
    let offering = service.update_service(id, input).await?;
    Ok(Json(offering))
}

/// Delete a service offering
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Service offering ID")
    ),
    responses(
        (status = 204, description = "Service offering deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_service<R: ServiceRepository>(
    State(service): State<Arc<OfferingService<R>>>,
    UuidPath(id): UuidPath,
) -> ServiceResult<impl IntoResponse> {
    service.delete_service(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
