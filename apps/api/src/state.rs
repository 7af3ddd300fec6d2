//! Application state management.
//!
//! Defines the shared application state passed to all request handlers:
//! configuration plus the process-wide database connection manager.

use database::mongodb::ConnectionManager;

/// Shared application state.
///
/// Cloned for each handler (inexpensive Arc clones). The connection manager
/// is the single owner of the MongoDB handle; handlers and repositories only
/// read through it.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Process-wide MongoDB connection manager
    pub db: ConnectionManager,
}
