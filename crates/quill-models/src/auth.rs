//! Authentication request and response bodies.
//!
//! Request structs carry plaintext passwords, so their `Debug` output redacts
//! them; handlers are instrumented and would otherwise log the field.

use std::fmt;

use quill_auth::MAX_PASSWORD_BYTES;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::users::ProfileResponse;

/// bcrypt reads at most 72 bytes, which is fewer than 72 characters once the
/// password leaves ASCII.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_bytes")
            .with_message("password must be at most 72 bytes".into()));
    }

    Ok(())
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(
        email(message = "email must be a valid email address"),
        length(max = 100, message = "email must be at most 100 characters")
    )]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(
        length(min = 6, max = 72, message = "password must be 6-72 characters"),
        custom(function = "validate_password_bytes")
    )]
    #[schema(example = "password123")]
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Returned by register and login.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: ProfileResponse,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"[redacted]")
            .field("user", &self.user)
            .finish()
    }
}
