use axum::{
    Router,
    routing::{get, post, put},
};

use super::controller::{create_post, delete_post, get_post, list_posts, update_post};
use crate::state::AppState;

pub fn init_public_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts))
        .route("/{id}", get(get_post))
}

/// Mutating routes; mounted behind `require_auth`.
pub fn init_protected_posts_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_post))
        .route("/{id}", put(update_post).delete(delete_post))
}
