//! PostgreSQL connection settings.
//!
//! - `DATABASE_URL`: connection string (required)
//! - `DB_MAX_OPEN_CONNS`: pool size (default 100)
//! - `DB_MAX_IDLE_CONNS`: connections kept warm (default 10, at most `DB_MAX_OPEN_CONNS`)
//! - `DB_CONN_MAX_LIFETIME`: connection lifetime in minutes (default 60)

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;
use crate::source::{parsed_or, positive, required};

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_open_conns: u32,
    pub max_idle_conns: u32,
    pub conn_max_lifetime_minutes: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&source, "DATABASE_URL")?;
        let max_open_conns = positive(
            "DB_MAX_OPEN_CONNS",
            parsed_or(&source, "DB_MAX_OPEN_CONNS", 100u32)?,
        )?;
        let max_idle_conns = positive(
            "DB_MAX_IDLE_CONNS",
            parsed_or(&source, "DB_MAX_IDLE_CONNS", 10u32)?,
        )?;
        let conn_max_lifetime_minutes = positive(
            "DB_CONN_MAX_LIFETIME",
            parsed_or(&source, "DB_CONN_MAX_LIFETIME", 60u64)?,
        )?;

        if max_idle_conns > max_open_conns {
            return Err(ConfigError::invalid(
                "DB_MAX_IDLE_CONNS",
                "cannot be greater than DB_MAX_OPEN_CONNS",
            ));
        }

        Ok(Self {
            url,
            max_open_conns,
            max_idle_conns,
            conn_max_lifetime_minutes,
        })
    }

    pub fn conn_max_lifetime(&self) -> Duration {
        Duration::from_secs(self.conn_max_lifetime_minutes * 60)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("max_open_conns", &self.max_open_conns)
            .field("max_idle_conns", &self.max_idle_conns)
            .field("conn_max_lifetime_minutes", &self.conn_max_lifetime_minutes)
            .finish()
    }
}
