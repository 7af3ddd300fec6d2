//! Handler tests for the Projects domain, run against the in-memory
//! repository.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_projects::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn service() -> ProjectService<InMemoryProjectRepository> {
    ProjectService::new(InMemoryProjectRepository::new())
}

#[tokio::test]
async fn test_create_project_handler_returns_201() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "atelier-api",
                "description": "Agency site backend",
                "tech_stack": ["rust", "axum", "mongodb"],
                "repo_url": "https://github.com/example/atelier-api",
                "featured": true
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let project: Project = json_body(response.into_body()).await;
    assert_eq!(project.name, "atelier-api");
    assert!(project.featured);
}

#[tokio::test]
async fn test_create_project_handler_rejects_bad_url() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "atelier-api",
                "repo_url": "definitely not a url"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_project_handler_returns_404_for_missing() {
    let app = handlers::router(service());

    let request = Request::builder()
        .method("GET")
        .uri(format!("/{}", uuid::Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_projects_handler_filters_featured() {
    let service = service();

    service
        .create_project(CreateProject {
            name: "showcase".to_string(),
            description: String::new(),
            tech_stack: vec![],
            repo_url: None,
            live_url: None,
            featured: true,
        })
        .await
        .unwrap();
    service
        .create_project(CreateProject {
            name: "internal".to_string(),
            description: String::new(),
            tech_stack: vec![],
            repo_url: None,
            live_url: None,
            featured: false,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/?featured=true")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let projects: Vec<Project> = json_body(response.into_body()).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "showcase");
}

#[tokio::test]
async fn test_delete_project_handler_returns_204() {
    let service = service();
    let created = service
        .create_project(CreateProject {
            name: "short-lived".to_string(),
            description: String::new(),
            tech_stack: vec![],
            repo_url: None,
            live_url: None,
            featured: false,
        })
        .await
        .unwrap();

    let app = handlers::router(service);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
