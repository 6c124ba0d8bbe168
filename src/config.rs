//! Environment-backed application configuration.

use crate::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    /// Connection string for the backing database.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `HOST` defaults to `0.0.0.0` and `PORT`
    /// defaults to `3000` when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {:?}", value),
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
