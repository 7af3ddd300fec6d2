use core_config::{
    AppInfo, Environment, FromEnv, app_info, http::HttpConfig, runtime::RuntimeMode,
    server::ServerConfig,
};
use database::mongodb::MongoConfig;

/// Application-specific configuration
/// Composes shared config components from the `core_config` and `database`
/// libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub http: HttpConfig,
    pub runtime: RuntimeMode,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let runtime = RuntimeMode::from_env();
        let mut mongodb = MongoConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=5000
        let http = HttpConfig::from_env()?; // CORS allow-list is required

        let app = app_info!();

        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        // A serverless instance must never queue operations against a handle
        // the platform may have torn down.
        if runtime.is_serverless() {
            mongodb.buffer_commands = false;
        }

        Ok(Self {
            app,
            mongodb,
            server,
            http,
            runtime,
            environment,
        })
    }
}
