//! # Quill Models
//!
//! Database rows, request DTOs and response bodies for the Quill API.
//!
//! - [`auth`]: registration, login and token responses
//! - [`users`]: user rows and the profile view
//! - [`posts`]: posts and their list/detail responses
//! - [`comments`]: comments nested under posts

pub mod auth;
pub mod comments;
pub mod posts;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use comments::{Comment, CommentWithAuthor, CreateCommentDto, PaginatedCommentsResponse};
pub use posts::{CreatePostDto, PaginatedPostsResponse, Post, PostWithAuthor, UpdatePostDto};
pub use users::{ProfileResponse, User};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain acknowledgement body, e.g. after a delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
