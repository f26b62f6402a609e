use anyhow::anyhow;
use quill_core::AppError;
use quill_models::User;
use sqlx::PgPool;
use tracing::instrument;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: i64) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, created_at, updated_at
             FROM users
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }
}
