use quill_core::AppError;
use thiserror::Error;

/// Failures raised by the auth core.
///
/// Every variant maps to exactly one HTTP status. `InvalidToken`
/// carries no detail: signature mismatch, malformed input, expiry and
/// not-yet-valid tokens are indistinguishable to callers.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("Failed to issue token: {0}")]
    TokenIssue(String),

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("{0}")]
    Forbidden(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => AppError::unauthorized(err.to_string()),
            AuthError::Forbidden(message) => AppError::forbidden(message),
            AuthError::Hashing(_) => {
                tracing::error!(error = %err, "Password hashing failed");
                AppError::internal_error("Failed to process password".to_string())
            }
            AuthError::TokenIssue(_) => {
                tracing::error!(error = %err, "Token issuance failed");
                AppError::internal_error("Failed to generate token".to_string())
            }
        }
    }
}
