//! Services Domain
//!
//! Service offerings shown on the agency site. Same layering as the other
//! domains: handlers → service → repository → models.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{ServiceError, ServiceResult};
pub use models::{CreateService, ServiceFilter, ServiceOffering, UpdateService};
pub use mongo::MongoServiceRepository;
pub use repository::{InMemoryServiceRepository, ServiceRepository};
pub use service::OfferingService;
