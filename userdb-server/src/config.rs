//! Database connection configuration
//!
//! Loaded once at startup from environment variables:
//! - `DB_USER`, `DB_PASS`, `DB_HOST`, `DB_NAME`: required, no defaults
//! - `DB_PORT`: optional (default: 5432)

use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// Default Postgres port when `DB_PORT` is unset
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Configuration error - fatal at startup
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {var} is not set")]
    Missing { var: &'static str },

    #[error("DB_PORT must be a port number, got '{value}'")]
    InvalidPort { value: String },
}

/// Connection descriptor for the user store
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let port = match lookup("DB_PORT").filter(|value| !value.is_empty()) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            user: required("DB_USER")?,
            password: required("DB_PASS")?,
            host: required("DB_HOST")?,
            port,
            database: required("DB_NAME")?,
        })
    }

    /// Build sqlx connect options from the individual parts.
    ///
    /// Parts are passed through as-is, so passwords containing `@` or `/`
    /// need no URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}
