//! # Quill Config
//!
//! Configuration types for the Quill API, loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`server`]: bind address and runtime environment
//! - [`database`]: PostgreSQL connection and pool settings
//! - [`logging`]: log level, format and output target
//!
//! Each config struct validates its values up front and reports the first
//! problem as a [`ConfigError`]. The binary decides whether that is fatal.
//!
//! # Example
//!
//! ```ignore
//! use quill_config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! config.log_summary();
//! ```

pub mod database;
mod error;
pub mod jwt;
pub mod logging;
pub mod server;
mod source;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{JwtConfig, mask_secret};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use server::{Environment, ServerConfig};

/// All configuration needed to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // JWT first: a missing secret is the one error the binary must never start with.
        let jwt = JwtConfig::from_source(&source)?;

        Ok(Self {
            server: ServerConfig::from_source(&source)?,
            database: DatabaseConfig::from_source(&source)?,
            jwt,
            log: LogConfig::from_source(&source)?,
        })
    }

    /// Logs the effective configuration with secrets masked.
    pub fn log_summary(&self) {
        tracing::info!(
            address = %self.server.address(),
            environment = %self.server.environment,
            db_max_open_conns = self.database.max_open_conns,
            db_max_idle_conns = self.database.max_idle_conns,
            db_conn_max_lifetime_minutes = self.database.conn_max_lifetime_minutes,
            jwt_expiration_hours = self.jwt.expiration_hours,
            jwt_secret = %mask_secret(&self.jwt.secret),
            log_level = self.log.level.as_str(),
            "Loaded configuration"
        );
    }
}
