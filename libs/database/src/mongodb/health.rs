use mongodb::bson::doc;
use std::time::Instant;

use super::ConnectionHandle;

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check MongoDB health with a lightweight ping command
///
/// Probes through an already established handle only; readiness checks must
/// never trigger a connection attempt of their own.
pub async fn check_health(handle: &ConnectionHandle) -> bool {
    handle
        .database()
        .run_command(doc! { "ping": 1 })
        .await
        .is_ok()
}

/// Check MongoDB health with timing and error details
pub async fn check_health_detailed(handle: &ConnectionHandle) -> HealthStatus {
    let start = Instant::now();

    match handle.database().run_command(doc! { "ping": 1 }).await {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms: start.elapsed().as_millis() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mongodb::{ConnectionManager, MongoConfig};

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let manager = ConnectionManager::new(MongoConfig::with_database(url, "atelier_test"));
        let handle = manager.ensure_connected().await.unwrap();

        assert!(check_health(&handle).await);

        let status = check_health_detailed(&handle).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }
}
