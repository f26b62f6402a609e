use anyhow::anyhow;
use quill_auth::{AuthError, is_owner};
use quill_core::{AppError, PaginationMeta, PaginationParams};
use quill_models::{Comment, CommentWithAuthor, CreateCommentDto, PaginatedCommentsResponse};
use sqlx::PgPool;
use tracing::instrument;

pub struct CommentService;

const COMMENT_WITH_AUTHOR_COLUMNS: &str =
    "c.id, c.content, c.user_id, u.username, c.post_id, c.created_at, c.updated_at";

impl CommentService {
    /// Comments hang off live posts only.
    async fn ensure_post_exists(db: &PgPool, post_id: i64) -> Result<(), AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(post_id)
        .fetch_one(db)
        .await?;

        if !exists {
            return Err(AppError::not_found(anyhow!("Post not found")));
        }
        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn list_comments(
        db: &PgPool,
        post_id: i64,
        params: &PaginationParams,
    ) -> Result<PaginatedCommentsResponse, AppError> {
        Self::ensure_post_exists(db, post_id).await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE post_id = $1 AND deleted_at IS NULL",
        )
        .bind(post_id)
        .fetch_one(db)
        .await?;

        let comments = sqlx::query_as::<_, CommentWithAuthor>(&format!(
            "SELECT {COMMENT_WITH_AUTHOR_COLUMNS}
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.post_id = $1 AND c.deleted_at IS NULL
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(post_id)
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedCommentsResponse {
            data: comments,
            meta: PaginationMeta::new(params, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn create_comment(
        db: &PgPool,
        user_id: i64,
        post_id: i64,
        dto: CreateCommentDto,
    ) -> Result<CommentWithAuthor, AppError> {
        Self::ensure_post_exists(db, post_id).await?;

        let comment = sqlx::query_as::<_, CommentWithAuthor>(&format!(
            "WITH c AS (
                 INSERT INTO comments (content, user_id, post_id)
                 VALUES ($1, $2, $3)
                 RETURNING id, content, user_id, post_id, created_at, updated_at
             )
             SELECT {COMMENT_WITH_AUTHOR_COLUMNS}
             FROM c
             JOIN users u ON u.id = c.user_id"
        ))
        .bind(&dto.content)
        .bind(user_id)
        .bind(post_id)
        .fetch_one(db)
        .await?;

        tracing::info!(comment_id = comment.id, post_id, user_id, "Comment created");
        Ok(comment)
    }

    #[instrument(skip(db))]
    pub async fn delete_comment(
        db: &PgPool,
        user_id: i64,
        post_id: i64,
        comment_id: i64,
    ) -> Result<(), AppError> {
        Self::ensure_post_exists(db, post_id).await?;

        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, content, user_id, post_id, created_at, updated_at
             FROM comments
             WHERE id = $1 AND post_id = $2 AND deleted_at IS NULL",
        )
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Comment not found")))?;

        if !is_owner(&comment, user_id) {
            return Err(
                AuthError::Forbidden("You can only delete your own comments".to_string()).into(),
            );
        }

        sqlx::query("UPDATE comments SET deleted_at = NOW() WHERE id = $1")
            .bind(comment.id)
            .execute(db)
            .await?;

        tracing::info!(comment_id, post_id, user_id, "Comment deleted");
        Ok(())
    }
}
