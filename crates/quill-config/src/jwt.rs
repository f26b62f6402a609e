//! JWT signing configuration.
//!
//! - `JWT_SECRET`: HMAC signing secret (required)
//! - `JWT_EXPIRATION_HOURS`: token lifetime in hours (default: 24)

use std::env;
use std::fmt;

use crate::error::ConfigError;
use crate::source::{parsed_or, positive, required};

pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(&source, "JWT_SECRET")?;
        let expiration_hours = positive(
            "JWT_EXPIRATION_HOURS",
            parsed_or(&source, "JWT_EXPIRATION_HOURS", DEFAULT_EXPIRATION_HOURS)?,
        )?;

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &mask_secret(&self.secret))
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// Masks a secret for display, keeping the first and last four characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
