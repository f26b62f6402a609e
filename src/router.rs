use axum::http::{Method, header};
use axum::{Json, Router, middleware, routing::get};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::{logging_middleware, request_id_middleware};
use crate::middleware::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::comments::router::{
    init_protected_comments_router, init_public_comments_router,
};
use crate::modules::posts::router::{init_protected_posts_router, init_public_posts_router};
use crate::modules::users::router::init_profile_router;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Quill API is running".to_string(),
    })
}

pub fn init_router(state: AppState) -> Router {
    let public = Router::new().nest("/auth", init_auth_router()).nest(
        "/posts",
        init_public_posts_router().merge(init_public_comments_router()),
    );

    // Every route below requires a verified bearer token.
    let protected = Router::new()
        .nest("/profile", init_profile_router())
        .nest(
            "/posts",
            init_protected_posts_router().merge(init_protected_comments_router()),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", public.merge(protected))
        // Runs after routing so the log carries the route template.
        .route_layer(middleware::from_fn(logging_middleware))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]),
        )
        .layer(middleware::from_fn(request_id_middleware))
}
