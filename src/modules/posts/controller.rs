use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use quill_core::{AppError, ErrorResponse, PaginationParams};
use quill_models::{
    CreatePostDto, MessageResponse, PaginatedPostsResponse, PostWithAuthor, UpdatePostDto,
};
use tracing::instrument;

use super::service::PostService;
use crate::middleware::AuthUser;
use crate::modules::parse_id;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of posts", body = PaginatedPostsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedPostsResponse>, AppError> {
    let posts = PostService::list_posts(&state.db, &params).await?;
    Ok(Json(posts))
}

/// Get a single post
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = PostWithAuthor),
        (status = 400, description = "Invalid post ID", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostWithAuthor>, AppError> {
    let id = parse_id(&id, "post")?;
    let post = PostService::get_post(&state.db, id).await?;
    Ok(Json(post))
}

/// Create a post as the authenticated user
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostWithAuthor),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn create_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<(StatusCode, Json<PostWithAuthor>), AppError> {
    let post = PostService::create_post(&state.db, auth_user.user_id, dto).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// Update a post; only its author may do this
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post ID")),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostWithAuthor),
        (status = 400, description = "Invalid post ID or body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the post's author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn update_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdatePostDto>,
) -> Result<Json<PostWithAuthor>, AppError> {
    let id = parse_id(&id, "post")?;
    let post = PostService::update_post(&state.db, auth_user.user_id, id, dto).await?;
    Ok(Json(post))
}

/// Soft-delete a post; only its author may do this
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 400, description = "Invalid post ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the post's author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Posts"
)]
#[instrument(skip(state))]
pub async fn delete_post(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "post")?;
    PostService::delete_post(&state.db, auth_user.user_id, id).await?;
    Ok(Json(MessageResponse::new("Post deleted successfully")))
}
