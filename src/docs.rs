use quill_core::{ErrorResponse, PaginationMeta, PaginationParams};
use quill_models::{
    AuthResponse, CommentWithAuthor, CreateCommentDto, CreatePostDto, LoginRequest,
    MessageResponse, PaginatedCommentsResponse, PaginatedPostsResponse, PostWithAuthor,
    ProfileResponse, RegisterRequest, UpdatePostDto,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::router::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::health_check,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::get_profile,
        crate::modules::posts::controller::list_posts,
        crate::modules::posts::controller::get_post,
        crate::modules::posts::controller::create_post,
        crate::modules::posts::controller::update_post,
        crate::modules::posts::controller::delete_post,
        crate::modules::comments::controller::list_comments,
        crate::modules::comments::controller::create_comment,
        crate::modules::comments::controller::delete_comment,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            MessageResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            ProfileResponse,
            PostWithAuthor,
            CreatePostDto,
            UpdatePostDto,
            PaginatedPostsResponse,
            CommentWithAuthor,
            CreateCommentDto,
            PaginatedCommentsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "The authenticated user's profile"),
        (name = "Posts", description = "Blog posts"),
        (name = "Comments", description = "Comments nested under posts")
    ),
    info(
        title = "Quill API",
        version = "0.1.0",
        description = "A small blogging backend built with Rust, Axum and PostgreSQL, using bearer-token authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
