use crate::{ConfigError, FromEnv, env_or_default, env_required};
use std::path::PathBuf;

/// Request-rate ceiling for the public API.
///
/// One token is replenished every `replenish_secs` seconds per client, with
/// bursts of up to `burst` requests.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub replenish_secs: u64,
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            replenish_secs: 1,
            burst: 60,
        }
    }
}

/// Cross-cutting HTTP middleware configuration
///
/// The CORS allow-list is deliberately required with no fallback: a deployed
/// API should never guess its frontend origin.
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Allowed cross-origin hosts, from comma-separated `CORS_ALLOWED_ORIGIN`
    pub cors_allowed_origins: Vec<String>,

    /// Request-rate ceiling
    pub rate_limit: RateLimitConfig,

    /// Maximum accepted request body, in bytes
    pub max_body_bytes: usize,

    /// Optional directory of static assets served under `/public`
    pub static_dir: Option<PathBuf>,
}

impl HttpConfig {
    fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "no origins given".to_string(),
            });
        }

        Ok(origins)
    }
}

impl FromEnv for HttpConfig {
    /// Environment variables:
    /// - `CORS_ALLOWED_ORIGIN` (required) - comma-separated allowed origins
    /// - `RATE_LIMIT_REPLENISH_SECS` (optional, default: 1)
    /// - `RATE_LIMIT_BURST` (optional, default: 60)
    /// - `MAX_REQUEST_BODY_BYTES` (optional, default: 1048576)
    /// - `STATIC_DIR` (optional) - directory served at `/public`
    fn from_env() -> Result<Self, ConfigError> {
        let cors_allowed_origins = Self::parse_origins(&env_required("CORS_ALLOWED_ORIGIN")?)?;

        let replenish_secs = env_or_default("RATE_LIMIT_REPLENISH_SECS", "1")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "RATE_LIMIT_REPLENISH_SECS".to_string(),
                details: format!("{}", e),
            })?;

        let burst = env_or_default("RATE_LIMIT_BURST", "60").parse().map_err(|e| {
            ConfigError::ParseError {
                key: "RATE_LIMIT_BURST".to_string(),
                details: format!("{}", e),
            }
        })?;

        let max_body_bytes = env_or_default("MAX_REQUEST_BODY_BYTES", "1048576")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MAX_REQUEST_BODY_BYTES".to_string(),
                details: format!("{}", e),
            })?;

        let static_dir = std::env::var("STATIC_DIR").ok().map(PathBuf::from);

        Ok(Self {
            cors_allowed_origins,
            rate_limit: RateLimitConfig {
                replenish_secs,
                burst,
            },
            max_body_bytes,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_config_requires_cors_origin() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            let result = HttpConfig::from_env();
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }

    #[test]
    fn test_http_config_parses_origin_list() {
        temp_env::with_vars(
            [
                (
                    "CORS_ALLOWED_ORIGIN",
                    Some("http://localhost:3000, https://atelier.example.com"),
                ),
                ("RATE_LIMIT_BURST", None::<&str>),
            ],
            || {
                let config = HttpConfig::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins,
                    vec![
                        "http://localhost:3000".to_string(),
                        "https://atelier.example.com".to_string()
                    ]
                );
                assert_eq!(config.rate_limit.burst, 60);
                assert_eq!(config.max_body_bytes, 1_048_576);
                assert!(config.static_dir.is_none());
            },
        );
    }

    #[test]
    fn test_http_config_rejects_empty_origin_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            assert!(HttpConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_http_config_custom_limits() {
        temp_env::with_vars(
            [
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000")),
                ("RATE_LIMIT_REPLENISH_SECS", Some("2")),
                ("RATE_LIMIT_BURST", Some("10")),
                ("MAX_REQUEST_BODY_BYTES", Some("2048")),
                ("STATIC_DIR", Some("/var/www/public")),
            ],
            || {
                let config = HttpConfig::from_env().unwrap();
                assert_eq!(config.rate_limit.replenish_secs, 2);
                assert_eq!(config.rate_limit.burst, 10);
                assert_eq!(config.max_body_bytes, 2048);
                assert_eq!(config.static_dir, Some(PathBuf::from("/var/www/public")));
            },
        );
    }

    #[test]
    fn test_http_config_invalid_burst() {
        temp_env::with_vars(
            [
                ("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000")),
                ("RATE_LIMIT_BURST", Some("lots")),
            ],
            || {
                let result = HttpConfig::from_env();
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("RATE_LIMIT_BURST"));
            },
        );
    }
}
