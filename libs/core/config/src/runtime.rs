use crate::env_or_default;

/// How the process is being run.
///
/// The same binary serves both deployments; the mode only changes when the
/// database connection is established and how a connection failure is
/// treated:
///
/// - `Server`: connect once at startup, before the listener binds. A failure
///   is fatal to the process.
/// - `Serverless`: defer connection to the first request and re-check on
///   every request. A failure is fatal to that request only; the warm
///   instance stays alive and the next invocation retries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeMode {
    Server,
    Serverless,
}

impl RuntimeMode {
    /// Reads `RUNTIME_MODE`; anything other than "serverless" means a
    /// long-running server.
    pub fn from_env() -> Self {
        let mode = env_or_default("RUNTIME_MODE", "server");
        if mode.eq_ignore_ascii_case("serverless") {
            RuntimeMode::Serverless
        } else {
            RuntimeMode::Server
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, RuntimeMode::Server)
    }

    pub fn is_serverless(&self) -> bool {
        matches!(self, RuntimeMode::Serverless)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_mode_defaults_to_server() {
        temp_env::with_var_unset("RUNTIME_MODE", || {
            let mode = RuntimeMode::from_env();
            assert_eq!(mode, RuntimeMode::Server);
            assert!(mode.is_server());
            assert!(!mode.is_serverless());
        });
    }

    #[test]
    fn test_runtime_mode_serverless() {
        temp_env::with_var("RUNTIME_MODE", Some("serverless"), || {
            let mode = RuntimeMode::from_env();
            assert_eq!(mode, RuntimeMode::Serverless);
            assert!(mode.is_serverless());
        });
    }

    #[test]
    fn test_runtime_mode_case_insensitive() {
        temp_env::with_var("RUNTIME_MODE", Some("Serverless"), || {
            assert_eq!(RuntimeMode::from_env(), RuntimeMode::Serverless);
        });
    }

    #[test]
    fn test_runtime_mode_unknown_value_is_server() {
        temp_env::with_var("RUNTIME_MODE", Some("lambda"), || {
            assert_eq!(RuntimeMode::from_env(), RuntimeMode::Server);
        });
    }
}
