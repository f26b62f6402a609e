//! Account creation from the command line.

use anyhow::{Context, bail};
use quill_auth::hash_password;
use quill_models::RegisterRequest;
use sqlx::PgPool;
use validator::Validate;

/// Creates a user after applying the same rules as `POST /api/auth/register`.
pub async fn create_user(
    db: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<i64> {
    let request = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    if let Err(errors) = request.validate() {
        bail!("Invalid user details: {}", errors);
    }

    let taken: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)",
    )
    .bind(username)
    .bind(email)
    .fetch_one(db)
    .await
    .context("Failed to check for existing users")?;
    if taken {
        bail!("A user with this username or email already exists");
    }

    let password_hash = hash_password(password)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(&password_hash)
    .fetch_one(db)
    .await
    .context("Failed to insert user")?;

    Ok(id)
}
