use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Base URL of the Firebase Realtime Database, e.g.
    /// `https://example.firebaseio.com`. Unset selects the in-memory store.
    pub firebase_url: Option<String>,
    /// Database secret or ID token appended as the `auth` query parameter.
    pub firebase_auth: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Retry budget for sequential-id allocation.
    pub max_attempts: u32,
    /// Identity stamped into `updatedBy` until real authentication lands.
    pub default_user_email: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_attempts: crate::logic::DEFAULT_MAX_ATTEMPTS,
            default_user_email: "current_user@example.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file, and
    /// environment variables with prefix `ROSTER_`.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        config = config.add_source(config::File::with_name("config").required(false));

        config = config.add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
