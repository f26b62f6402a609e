pub mod auth;
pub mod comments;
pub mod posts;
pub mod users;

use anyhow::anyhow;
use quill_core::AppError;

/// Parses a numeric path segment, answering 400 with `Invalid <label> ID`.
pub(crate) fn parse_id(raw: &str, label: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request(anyhow!("Invalid {} ID", label)))
}
