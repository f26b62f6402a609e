//! Lookup helpers shared by the config structs.
//!
//! Every `from_env` constructor delegates to a `from_source` variant that takes
//! a key lookup closure, so parsing can be exercised without touching the
//! process environment.

use std::str::FromStr;

use crate::error::ConfigError;

/// Returns the value for `key`, treating empty strings as unset.
pub(crate) fn optional<F>(source: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    source(key).filter(|value| !value.trim().is_empty())
}

pub(crate) fn required<F>(source: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(source, key).ok_or(ConfigError::Missing(key))
}

pub(crate) fn parsed_or<F, T>(source: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match optional(source, key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(key, format!("`{}` is not a valid number", raw))),
        None => Ok(default),
    }
}

pub(crate) fn positive<T>(key: &'static str, value: T) -> Result<T, ConfigError>
where
    T: PartialOrd + Default,
{
    if value <= T::default() {
        return Err(ConfigError::invalid(key, "must be greater than 0"));
    }
    Ok(value)
}
