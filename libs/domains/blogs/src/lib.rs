//! Blogs Domain
//!
//! Complete domain implementation for managing blog posts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_blogs::{
//!     handlers,
//!     repository::InMemoryBlogRepository,
//!     service::BlogService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryBlogRepository::new();
//! let service = BlogService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BlogError, BlogResult};
pub use models::{Blog, BlogFilter, CreateBlog, UpdateBlog};
pub use mongo::MongoBlogRepository;
pub use repository::{BlogRepository, InMemoryBlogRepository};
pub use service::BlogService;
