//! Log output configuration.
//!
//! - `LOG_LEVEL`: `debug`, `info`, `warn` or `error` (default `info`)
//! - `LOG_FORMAT`: `json` or `pretty` (default `json`)
//! - `LOG_OUTPUT_PATH`: optional file path; logs go to stdout when unset

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::source::optional;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::invalid(
                "LOG_LEVEL",
                format!("`{}` must be one of: debug, info, warn, error", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(ConfigError::invalid(
                "LOG_FORMAT",
                format!("`{}` must be one of: json, pretty", other),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output_path: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            output_path: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let level = match optional(&source, "LOG_LEVEL") {
            Some(raw) => raw.parse()?,
            None => defaults.level,
        };
        let format = match optional(&source, "LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.format,
        };
        let output_path = optional(&source, "LOG_OUTPUT_PATH").map(PathBuf::from);

        Ok(Self {
            level,
            format,
            output_path,
        })
    }
}
