//! Projects Domain
//!
//! Portfolio project entries: what was built, with which stack, and where to
//! find it. Same layering as the other domains: handlers → service →
//! repository → models.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{ProjectError, ProjectResult};
pub use models::{CreateProject, Project, ProjectFilter, UpdateProject};
pub use mongo::MongoProjectRepository;
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::ProjectService;
