use anyhow::anyhow;
use quill_auth::{AuthError, is_owner};
use quill_core::{AppError, PaginationMeta, PaginationParams};
use quill_models::{CreatePostDto, PaginatedPostsResponse, Post, PostWithAuthor, UpdatePostDto};
use sqlx::PgPool;
use tracing::instrument;

pub struct PostService;

const POST_WITH_AUTHOR_COLUMNS: &str =
    "p.id, p.title, p.content, p.user_id, u.username, p.created_at, p.updated_at";

fn post_not_found() -> AppError {
    AppError::not_found(anyhow!("Post not found"))
}

impl PostService {
    #[instrument(skip(db))]
    pub async fn list_posts(
        db: &PgPool,
        params: &PaginationParams,
    ) -> Result<PaginatedPostsResponse, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE deleted_at IS NULL")
            .fetch_one(db)
            .await?;

        let posts = sqlx::query_as::<_, PostWithAuthor>(&format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS}
             FROM posts p
             JOIN users u ON u.id = p.user_id
             WHERE p.deleted_at IS NULL
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedPostsResponse {
            data: posts,
            meta: PaginationMeta::new(params, total),
        })
    }

    #[instrument(skip(db))]
    pub async fn get_post(db: &PgPool, id: i64) -> Result<PostWithAuthor, AppError> {
        sqlx::query_as::<_, PostWithAuthor>(&format!(
            "SELECT {POST_WITH_AUTHOR_COLUMNS}
             FROM posts p
             JOIN users u ON u.id = p.user_id
             WHERE p.id = $1 AND p.deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(post_not_found)
    }

    /// Loads the bare row; ownership is read fresh on every mutation.
    #[instrument(skip(db))]
    pub async fn find_post(db: &PgPool, id: i64) -> Result<Post, AppError> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, content, user_id, created_at, updated_at
             FROM posts
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(post_not_found)
    }

    #[instrument(skip(db))]
    pub async fn create_post(
        db: &PgPool,
        user_id: i64,
        dto: CreatePostDto,
    ) -> Result<PostWithAuthor, AppError> {
        let post = sqlx::query_as::<_, PostWithAuthor>(&format!(
            "WITH p AS (
                 INSERT INTO posts (title, content, user_id)
                 VALUES ($1, $2, $3)
                 RETURNING id, title, content, user_id, created_at, updated_at
             )
             SELECT {POST_WITH_AUTHOR_COLUMNS}
             FROM p
             JOIN users u ON u.id = p.user_id"
        ))
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        tracing::info!(post_id = post.id, user_id, "Post created");
        Ok(post)
    }

    #[instrument(skip(db))]
    pub async fn update_post(
        db: &PgPool,
        user_id: i64,
        id: i64,
        dto: UpdatePostDto,
    ) -> Result<PostWithAuthor, AppError> {
        let post = Self::find_post(db, id).await?;
        if !is_owner(&post, user_id) {
            return Err(AuthError::Forbidden("You can only update your own posts".to_string()).into());
        }

        sqlx::query(
            "UPDATE posts
             SET title = $1, content = $2, updated_at = NOW()
             WHERE id = $3 AND deleted_at IS NULL",
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(id)
        .execute(db)
        .await?;

        Self::get_post(db, id).await
    }

    #[instrument(skip(db))]
    pub async fn delete_post(db: &PgPool, user_id: i64, id: i64) -> Result<(), AppError> {
        let post = Self::find_post(db, id).await?;
        if !is_owner(&post, user_id) {
            return Err(AuthError::Forbidden("You can only delete your own posts".to_string()).into());
        }

        let result = sqlx::query(
            "UPDATE posts SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(post_not_found());
        }

        tracing::info!(post_id = id, user_id, "Post deleted");
        Ok(())
    }
}
