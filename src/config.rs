use thiserror::Error;

/// Service configuration, loaded once at process start and passed to the
/// components that need it.
///
/// The Postgres variables are required; service metadata falls back to
/// defaults when unset.
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_name: String,
    pub version: String,
    pub api_v1_prefix: String,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_db: String,
    pub postgres_host: String,
    pub postgres_port: String,
}

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

impl Settings {
    /// Reads the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            project_name: env_or("PROJECT_NAME", "Item Management Service"),
            version: env_or("VERSION", "1.0.0"),
            api_v1_prefix: env_or("API_V1_PREFIX", "/api/v1"),
            postgres_user: require("POSTGRES_USER")?,
            postgres_password: require("POSTGRES_PASSWORD")?,
            postgres_db: require("POSTGRES_DB")?,
            postgres_host: require("POSTGRES_HOST")?,
            postgres_port: require("POSTGRES_PORT")?,
        })
    }

    /// Assembles the Postgres connection string
    pub fn database_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_db
        )
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
