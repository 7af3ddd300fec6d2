//! Teams Domain
//!
//! Team member profiles shown on the agency site. Same layering as the other
//! domains: handlers → service → repository → models.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod service;

pub use error::{TeamError, TeamResult};
pub use models::{CreateTeamMember, TeamFilter, TeamMember, UpdateTeamMember};
pub use mongo::MongoTeamRepository;
pub use repository::{InMemoryTeamRepository, TeamRepository};
pub use service::TeamService;
