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

use crate::error::BlogResult;
use crate::models::{Blog, BlogFilter, CreateBlog, UpdateBlog};
use crate::repository::BlogRepository;
use crate::service::BlogService;

const TAG: &str = "blogs";

/// OpenAPI documentation for the Blogs API
#[derive(OpenApi)]
#[openapi(
    paths(list_blogs, create_blog, get_blog, update_blog, delete_blog),
    components(
        schemas(Blog, CreateBlog, UpdateBlog, BlogFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Blog post endpoints")
    )
)]
pub struct ApiDoc;

/// Create the blog router with all HTTP endpoints
pub fn router<R: BlogRepository + 'static>(service: BlogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route(
            "/{id}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .with_state(shared_service)
}

/// List blog posts with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(BlogFilter),
    responses(
        (status = 200, description = "List of blog posts", body = Vec<Blog>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_blogs<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    Query(filter): Query<BlogFilter>,
) -> BlogResult<Json<Vec<Blog>>> {
    let blogs = service.list_blogs(filter).await?;
    Ok(Json(blogs))
}

/// Create a new blog post
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBlog,
    responses(
        (status = 201, description = "Blog post created successfully", body = Blog),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBlog>,
) -> BlogResult<impl IntoResponse> {
    let blog = service.create_blog(input).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// Get a blog post by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Blog post found", body = Blog),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    UuidPath(id): UuidPath,
) -> BlogResult<Json<Blog>> {
    let blog = service.get_blog(id).await?;
    Ok(Json(blog))
}

/// Update a blog post
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Blog post ID")
    ),
    request_body = UpdateBlog,
    responses(
        (status = 200, description = "Blog post updated successfully", body = Blog),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateBlog>,
) -> BlogResult<Json<Blog>> {
    let blog = service.update_blog(id, input).await?;
    Ok(Json(blog))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Blog post ID")
    ),
    responses(
        (status = 204, description = "Blog post deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_blog<R: BlogRepository>(
    State(service): State<Arc<BlogService<R>>>,
    UuidPath(id): UuidPath,
) -> BlogResult<impl IntoResponse> {
    service.delete_blog(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
