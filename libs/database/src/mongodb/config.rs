use core_config::{ConfigError, FromEnv, env_required_any};
use std::str::FromStr;

/// MongoDB connection configuration
///
/// Can be constructed manually or loaded from environment variables.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// // Manual construction
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "atelier");
///
/// // From environment variables
/// let config = MongoConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection string (required)
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections the pool keeps open
    pub min_pool_size: u32,

    /// TCP connect timeout in milliseconds
    pub connect_timeout_ms: u64,

    /// Server selection timeout in milliseconds; bounds how long an
    /// establishment attempt (and any later operation) waits for a usable
    /// server before failing
    pub server_selection_timeout_ms: u64,

    /// Seconds an idle pooled connection may live before the pool closes it
    pub max_idle_time_secs: u64,

    /// When false, operations issued while disconnected fail immediately with
    /// `MongoError::NotConnected` instead of triggering an establishment.
    /// Disable in serverless deployments so a request never queues work
    /// against a torn-down handle.
    pub buffer_commands: bool,
}

impl MongoConfig {
    /// Create a MongoConfig with just a URL and the default database name
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Create a MongoConfig with a specific database name
    ///
    /// # Example
    /// ```ignore
    /// let config = MongoConfig::with_database("mongodb://localhost:27017", "atelier");
    /// ```
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the application name reported to the server
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Get a reference to the MongoDB URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the database name
    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "atelier".to_string(),
            app_name: None,
            max_pool_size: 10,
            min_pool_size: 0,
            connect_timeout_ms: 10_000,
            server_selection_timeout_ms: 30_000,
            max_idle_time_secs: 300,
            buffer_commands: true,
        }
    }
}

fn env_parsed_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (required) - MongoDB connection string
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (required) - Database name
/// - `MONGODB_APP_NAME` (optional) - Application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 10)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 0)
/// - `MONGODB_CONNECT_TIMEOUT_MS` (optional, default: 10000)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_MS` (optional, default: 30000)
/// - `MONGODB_MAX_IDLE_TIME_SECS` (optional, default: 300)
/// - `MONGODB_BUFFER_COMMANDS` (optional, default: true)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required_any(&["MONGODB_URL", "MONGO_URL"])?;
        let database = env_required_any(&["MONGODB_DATABASE", "MONGO_DATABASE"])?;
        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let defaults = Self::default();
        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size: env_parsed_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parsed_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_ms: env_parsed_or(
                "MONGODB_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout_ms,
            )?,
            server_selection_timeout_ms: env_parsed_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_MS",
                defaults.server_selection_timeout_ms,
            )?,
            max_idle_time_secs: env_parsed_or(
                "MONGODB_MAX_IDLE_TIME_SECS",
                defaults.max_idle_time_secs,
            )?,
            buffer_commands: env_parsed_or("MONGODB_BUFFER_COMMANDS", defaults.buffer_commands)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_new() {
        let config = MongoConfig::new("mongodb://localhost:27017");
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database, "atelier");
        assert_eq!(config.max_pool_size, 10);
        assert!(config.buffer_commands);
    }

    #[test]
    fn test_mongo_config_with_database() {
        let config = MongoConfig::with_database("mongodb://localhost:27017", "mydb");
        assert_eq!(config.database, "mydb");
    }

    #[test]
    fn test_mongo_config_with_app_name() {
        let config = MongoConfig::new("mongodb://localhost:27017").with_app_name("atelier-api");
        assert_eq!(config.app_name, Some("atelier-api".to_string()));
    }

    #[test]
    fn test_mongo_config_from_env() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
                ("MONGODB_MAX_POOL_SIZE", Some("25")),
                ("MONGODB_BUFFER_COMMANDS", Some("false")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://localhost:27017");
                assert_eq!(config.database, "testdb");
                assert_eq!(config.max_pool_size, 25);
                assert!(!config.buffer_commands);
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_fallback() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None::<&str>),
                ("MONGO_DATABASE", Some("fallbackdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "fallbackdb");
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_missing_url() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None::<&str>),
                ("MONGODB_DATABASE", Some("testdb")),
            ],
            || {
                let result = MongoConfig::from_env();
                assert!(result.is_err());
                let err = result.unwrap_err();
                assert!(err.to_string().contains("MONGODB_URL"));
            },
        );
    }

    #[test]
    fn test_mongo_config_from_env_invalid_pool_size() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_DATABASE", Some("testdb")),
                ("MONGODB_MAX_POOL_SIZE", Some("not_a_number")),
            ],
            || {
                let result = MongoConfig::from_env();
                assert!(result.is_err());
                assert!(
                    result
                        .unwrap_err()
                        .to_string()
                        .contains("MONGODB_MAX_POOL_SIZE")
                );
            },
        );
    }
}
