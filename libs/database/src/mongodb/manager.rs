//! Serverless-safe connection manager.
//!
//! Owns the process-wide MongoDB handle: lazily establishes it on first use,
//! caches it for reuse, and memoizes the in-flight establishment so
//! concurrent requests attach to one attempt instead of racing to open
//! multiple pools against the deployment's connection ceiling.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use mongodb::bson::doc;
use mongodb::event::EventHandler;
use mongodb::event::sdam::SdamEvent;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde::Serialize;
use strum::Display;
use tracing::{debug, info, warn};

use super::MongoConfig;
use super::error::MongoError;

/// Lifecycle state of the managed connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
}

/// Non-blocking snapshot of the manager, suitable for health reporting.
/// `host` and `database` are populated only while connected.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    pub state: ConnectionState,
    pub host: Option<String>,
    pub database: Option<String>,
}

/// A live, established connection to the document store.
///
/// Cheap to clone: the driver's `Client` is an `Arc` around a shared pool.
/// Handles are only produced by [`ConnectionManager`]; everything else reads
/// through one.
#[derive(Clone)]
pub struct ConnectionHandle {
    client: Client,
    database: Database,
    /// Address of the first configured host, for status reporting
    pub host: String,
    /// Name of the selected database
    pub database_name: String,
    /// When this handle finished establishment
    pub established_at: DateTime<Utc>,
}

impl ConnectionHandle {
    /// The selected database
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// A typed collection in the selected database
    pub fn collection<T>(&self, name: &str) -> mongodb::Collection<T>
    where
        T: Send + Sync,
    {
        self.database.collection(name)
    }
}

impl fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("host", &self.host)
            .field("database_name", &self.database_name)
            .field("established_at", &self.established_at)
            .finish_non_exhaustive()
    }
}

type EstablishFuture = Shared<BoxFuture<'static, Result<ConnectionHandle, MongoError>>>;

enum Slot {
    Disconnected,
    Connecting { attempt: u64, pending: EstablishFuture },
    Connected { attempt: u64, handle: ConnectionHandle },
    Disconnecting,
}

struct Inner {
    config: MongoConfig,
    slot: Mutex<Slot>,
    attempts: AtomicU64,
}

/// Process-wide owner of the MongoDB connection lifecycle.
///
/// Clone freely; all clones share one cached handle. The intended wiring is a
/// single manager held in the application state, with every request handler
/// reading through it.
#[derive(Clone)]
pub struct ConnectionManager {
    inner: Arc<Inner>,
}

impl ConnectionManager {
    pub fn new(config: MongoConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                slot: Mutex::new(Slot::Disconnected),
                attempts: AtomicU64::new(0),
            }),
        }
    }

    /// Return the cached handle, establishing it first if necessary.
    ///
    /// Already connected: returns immediately with no I/O. An establishment
    /// already in flight: attaches to it, so every concurrent caller observes
    /// the same outcome. Disconnected: starts exactly one attempt. A failed
    /// attempt leaves the manager disconnected; the next call starts fresh —
    /// there is no internal retry.
    pub async fn ensure_connected(&self) -> Result<ConnectionHandle, MongoError> {
        let (attempt, pending) = {
            let mut slot = self.inner.slot.lock().expect("connection slot poisoned");
            match &*slot {
                Slot::Connected { handle, .. } => return Ok(handle.clone()),
                Slot::Connecting { attempt, pending } => (*attempt, pending.clone()),
                Slot::Disconnected | Slot::Disconnecting => {
                    let attempt = self.inner.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    let pending = establish(
                        self.inner.config.clone(),
                        Arc::downgrade(&self.inner),
                        attempt,
                    )
                    .boxed()
                    .shared();
                    *slot = Slot::Connecting {
                        attempt,
                        pending: pending.clone(),
                    };
                    (attempt, pending)
                }
            }
        };

        let outcome = pending.await;
        self.inner.resolve(attempt, &outcome);
        outcome
    }

    /// Snapshot of the current state. Never performs I/O and never triggers
    /// an establishment.
    pub fn status(&self) -> ConnectionStatus {
        let slot = self.inner.slot.lock().expect("connection slot poisoned");
        let (state, host, database) = match &*slot {
            Slot::Disconnected => (ConnectionState::Disconnected, None, None),
            Slot::Connecting { .. } => (ConnectionState::Connecting, None, None),
            Slot::Connected { handle, .. } => (
                ConnectionState::Connected,
                Some(handle.host.clone()),
                Some(handle.database_name.clone()),
            ),
            Slot::Disconnecting => (ConnectionState::Disconnecting, None, None),
        };
        ConnectionStatus {
            state,
            host,
            database,
        }
    }

    /// The cached handle, if currently connected. No I/O.
    pub fn handle(&self) -> Option<ConnectionHandle> {
        match &*self.inner.slot.lock().expect("connection slot poisoned") {
            Slot::Connected { handle, .. } => Some(handle.clone()),
            _ => None,
        }
    }

    /// The selected database, for repositories.
    ///
    /// Connected: returns with no I/O. Disconnected with command buffering
    /// enabled: falls through to [`ensure_connected`](Self::ensure_connected).
    /// Disconnected with buffering disabled: fails immediately with
    /// [`MongoError::NotConnected`] — in a serverless runtime an operation
    /// must never wait on a handle the platform may have torn down.
    pub async fn database(&self) -> Result<Database, MongoError> {
        if let Some(handle) = self.handle() {
            return Ok(handle.database.clone());
        }
        if self.inner.config.buffer_commands {
            Ok(self.ensure_connected().await?.database.clone())
        } else {
            Err(MongoError::NotConnected)
        }
    }

    /// Number of establishment attempts started over the manager's lifetime
    pub fn attempts(&self) -> u64 {
        self.inner.attempts.load(Ordering::SeqCst)
    }

    /// Close the underlying client and release its pool.
    ///
    /// Safe to call when nothing is connected (no-op). An in-flight
    /// establishment is abandoned; its product is closed on arrival. A later
    /// `ensure_connected` performs a fresh establishment.
    pub async fn shutdown(&self) {
        let previous = {
            let mut slot = self.inner.slot.lock().expect("connection slot poisoned");
            match &*slot {
                Slot::Connected { .. } => std::mem::replace(&mut *slot, Slot::Disconnecting),
                Slot::Disconnecting => return,
                _ => {
                    *slot = Slot::Disconnected;
                    return;
                }
            }
        };

        if let Slot::Connected { handle, .. } = previous {
            info!(host = %handle.host, "closing MongoDB connection");
            handle.client.shutdown().await;
        }

        let mut slot = self.inner.slot.lock().expect("connection slot poisoned");
        if matches!(&*slot, Slot::Disconnecting) {
            *slot = Slot::Disconnected;
        }
    }
}

impl Inner {
    /// Record the outcome of establishment attempt `attempt`.
    ///
    /// Every waiter on the shared future calls this; the attempt number makes
    /// it idempotent, and keeps a stale waiter from clobbering a newer
    /// attempt. An outcome that arrives after its attempt was abandoned
    /// (shutdown raced it) is closed instead of cached.
    fn resolve(&self, attempt: u64, outcome: &Result<ConnectionHandle, MongoError>) {
        let orphan = {
            let mut slot = self.slot.lock().expect("connection slot poisoned");
            match &*slot {
                Slot::Connecting { attempt: a, .. } if *a == attempt => {
                    match outcome {
                        Ok(handle) => {
                            info!(
                                host = %handle.host,
                                database = %handle.database_name,
                                "MongoDB connection established"
                            );
                            *slot = Slot::Connected {
                                attempt,
                                handle: handle.clone(),
                            };
                        }
                        Err(e) => {
                            warn!(error = %e, "MongoDB connection attempt failed");
                            *slot = Slot::Disconnected;
                        }
                    }
                    None
                }
                // Another waiter on the same attempt got here first.
                Slot::Connected { attempt: a, .. } if *a == attempt => None,
                _ => outcome.as_ref().ok().cloned(),
            }
        };

        if let Some(handle) = orphan {
            debug!("closing connection established by an abandoned attempt");
            tokio::spawn(async move { handle.client.shutdown().await });
        }
    }

    /// Invoked from the driver's SDAM event stream when a heartbeat fails.
    /// Downgrades a connected slot so the next `ensure_connected`
    /// re-establishes instead of returning a stale handle.
    fn on_heartbeat_failure(&self, attempt: u64, error: &mongodb::error::Error) {
        let mut slot = self.slot.lock().expect("connection slot poisoned");
        if matches!(&*slot, Slot::Connected { attempt: a, .. } if *a == attempt) {
            warn!(error = %error, "MongoDB transport lost, marking connection as disconnected");
            *slot = Slot::Disconnected;
        }
    }
}

async fn establish(
    config: MongoConfig,
    inner: Weak<Inner>,
    attempt: u64,
) -> Result<ConnectionHandle, MongoError> {
    if config.url.trim().is_empty() {
        return Err(MongoError::Configuration(
            "MongoDB connection string is empty".to_string(),
        ));
    }

    debug!(attempt, "establishing MongoDB connection");

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_millis(config.connect_timeout_ms));
    options.server_selection_timeout =
        Some(Duration::from_millis(config.server_selection_timeout_ms));
    options.max_idle_time = Some(Duration::from_secs(config.max_idle_time_secs));
    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let host = options
        .hosts
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "unknown".to_string());

    // The callback holds a weak reference: the client must not keep the
    // manager alive, and events from an abandoned client must not touch a
    // newer attempt's state.
    options.sdam_event_handler = Some(EventHandler::callback(move |event: SdamEvent| {
        if let SdamEvent::ServerHeartbeatFailed(ev) = event {
            if let Some(inner) = inner.upgrade() {
                inner.on_heartbeat_failure(attempt, &ev.failure);
            }
        }
    }));

    let client = Client::with_options(options)?;
    let database = client.database(&config.database);

    // Client construction is lazy; a ping proves the deployment is reachable
    // within server_selection_timeout.
    if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
        let cause = e.to_string();
        client.shutdown().await;
        return Err(MongoError::ConnectionFailed(cause));
    }

    Ok(ConnectionHandle {
        client,
        database,
        host,
        database_name: config.database.clone(),
        established_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn unreachable_config() -> MongoConfig {
        // TEST-NET-1 address, nothing listens there. Short timeouts keep each
        // attempt bounded without a running deployment.
        let mut config = MongoConfig::with_database("mongodb://192.0.2.1:27017", "atelier_test");
        config.connect_timeout_ms = 200;
        config.server_selection_timeout_ms = 300;
        config
    }

    #[tokio::test]
    async fn status_reads_without_io() {
        let manager = ConnectionManager::new(unreachable_config());
        let status = manager.status();
        assert_eq!(status.state, ConnectionState::Disconnected);
        assert!(status.host.is_none());
        assert!(status.database.is_none());
        assert_eq!(manager.attempts(), 0);
    }

    #[tokio::test]
    async fn empty_url_fails_without_network_io() {
        let mut config = unreachable_config();
        config.url = String::new();
        let manager = ConnectionManager::new(config);

        let err = manager.ensure_connected().await.unwrap_err();
        assert!(matches!(err, MongoError::Configuration(_)));
        assert_eq!(manager.status().state, ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn unreachable_host_fails_within_bounded_time() {
        let manager = ConnectionManager::new(unreachable_config());

        let started = Instant::now();
        let err = manager.ensure_connected().await.unwrap_err();
        assert!(
            started.elapsed() < Duration::from_secs(10),
            "attempt did not respect its timeouts: {:?}",
            started.elapsed()
        );
        match err {
            MongoError::ConnectionFailed(_) | MongoError::Mongo(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(manager.status().state, ConnectionState::Disconnected);
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_attempt() {
        let manager = ConnectionManager::new(unreachable_config());

        let (a, b, c) = tokio::join!(
            manager.ensure_connected(),
            manager.ensure_connected(),
            manager.ensure_connected(),
        );

        assert!(a.is_err() && b.is_err() && c.is_err());
        assert_eq!(manager.attempts(), 1, "waiters must share one attempt");
        assert_eq!(a.unwrap_err().to_string(), b.unwrap_err().to_string());
    }

    #[tokio::test]
    async fn failed_attempt_resets_for_the_next_caller() {
        let manager = ConnectionManager::new(unreachable_config());

        assert!(manager.ensure_connected().await.is_err());
        assert_eq!(manager.attempts(), 1);

        // no internal retry: the next call starts a fresh attempt
        assert!(manager.ensure_connected().await.is_err());
        assert_eq!(manager.attempts(), 2);
    }

    #[tokio::test]
    async fn shutdown_without_connection_is_a_noop() {
        let manager = ConnectionManager::new(unreachable_config());
        manager.shutdown().await;
        assert_eq!(manager.status().state, ConnectionState::Disconnected);
        assert_eq!(manager.attempts(), 0);
    }

    #[tokio::test]
    async fn database_fails_fast_with_buffering_disabled() {
        let mut config = unreachable_config();
        config.buffer_commands = false;
        let manager = ConnectionManager::new(config);

        let err = manager.database().await.unwrap_err();
        assert!(matches!(err, MongoError::NotConnected));
        assert_eq!(manager.attempts(), 0, "fail-fast accessor must not connect");
    }

    #[tokio::test]
    async fn database_with_buffering_attempts_establishment() {
        let manager = ConnectionManager::new(unreachable_config());
        assert!(manager.database().await.is_err());
        assert_eq!(manager.attempts(), 1);
    }

    #[test]
    fn connection_state_serializes_lowercase() {
        let json = serde_json::to_string(&ConnectionState::Disconnected).unwrap();
        assert_eq!(json, "\"disconnected\"");
        assert_eq!(ConnectionState::Connecting.to_string(), "connecting");
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn connect_reuse_and_shutdown_cycle() {
        let url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let manager = ConnectionManager::new(MongoConfig::with_database(url, "atelier_test"));

        let first = manager.ensure_connected().await.unwrap();
        assert_eq!(manager.status().state, ConnectionState::Connected);
        assert_eq!(manager.attempts(), 1);

        // warm call reuses the cached handle with no new attempt
        let second = manager.ensure_connected().await.unwrap();
        assert_eq!(second.established_at, first.established_at);
        assert_eq!(manager.attempts(), 1);

        manager.shutdown().await;
        assert_eq!(manager.status().state, ConnectionState::Disconnected);

        manager.ensure_connected().await.unwrap();
        assert_eq!(manager.attempts(), 2);
    }
}
