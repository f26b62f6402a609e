use axum::{
    Router,
    routing::{delete, get, post},
};

use super::controller::{create_comment, delete_comment, list_comments};
use crate::state::AppState;

// Paths are relative to `/api/posts`.

pub fn init_public_comments_router() -> Router<AppState> {
    Router::new().route("/{id}/comments", get(list_comments))
}

pub fn init_protected_comments_router() -> Router<AppState> {
    Router::new()
        .route("/{id}/comments", post(create_comment))
        .route("/{id}/comments/{comment_id}", delete(delete_comment))
}
