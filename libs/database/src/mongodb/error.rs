/// Error type for MongoDB connection management and operations
///
/// The type is `Clone` (the driver's own error is reference-counted) so a
/// single establishment failure can be handed to every caller waiting on the
/// same in-flight attempt.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Establishment reached the deployment but could not complete (network,
    /// auth, timeout). Carries the underlying cause as text.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The connection string (or another setting) is unusable. Raised before
    /// any network I/O is attempted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation was issued while disconnected and command buffering is
    /// disabled.
    #[error("Database is not connected")]
    NotConnected,
}

/// Result type alias for MongoDB operations
pub type MongoResult<T> = Result<T, MongoError>;
