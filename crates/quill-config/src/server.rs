//! HTTP server configuration.
//!
//! - `SERVER_HOST` (default `0.0.0.0`)
//! - `SERVER_PORT` (default `8080`)
//! - `APP_ENV`: `development`, `production` or `test` (default `development`)

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::source::{optional, parsed_or};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "debug" => Ok(Self::Development),
            "production" | "release" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::invalid(
                "APP_ENV",
                format!("`{}` must be one of: development, production, test", other),
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = optional(&source, "SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parsed_or(&source, "SERVER_PORT", 8080u16)?;
        let environment = match optional(&source, "APP_ENV") {
            Some(raw) => raw.parse()?,
            None => Environment::Development,
        };

        Ok(Self {
            host,
            port,
            environment,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
