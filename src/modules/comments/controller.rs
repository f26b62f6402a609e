use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use quill_core::{AppError, ErrorResponse, PaginationParams};
use quill_models::{CommentWithAuthor, CreateCommentDto, MessageResponse, PaginatedCommentsResponse};
use tracing::instrument;

use super::service::CommentService;
use crate::middleware::AuthUser;
use crate::modules::parse_id;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List a post's comments, newest first
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    params(
        ("id" = i64, Path, description = "Post ID"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Page of comments", body = PaginatedCommentsResponse),
        (status = 400, description = "Invalid post ID", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedCommentsResponse>, AppError> {
    let post_id = parse_id(&id, "post")?;
    let comments = CommentService::list_comments(&state.db, post_id, &params).await?;
    Ok(Json(comments))
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/posts/{id}/comments",
    params(("id" = i64, Path, description = "Post ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentWithAuthor),
        (status = 400, description = "Invalid post ID or body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<CommentWithAuthor>), AppError> {
    let post_id = parse_id(&id, "post")?;
    let comment =
        CommentService::create_comment(&state.db, auth_user.user_id, post_id, dto).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Soft-delete a comment; only its author may do this
#[utoipa::path(
    delete,
    path = "/api/posts/{id}/comments/{comment_id}",
    params(
        ("id" = i64, Path, description = "Post ID"),
        ("comment_id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the comment's author", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Comments"
)]
#[instrument(skip(state))]
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    let post_id = parse_id(&id, "post")?;
    let comment_id = parse_id(&comment_id, "comment")?;
    CommentService::delete_comment(&state.db, auth_user.user_id, post_id, comment_id).await?;
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
