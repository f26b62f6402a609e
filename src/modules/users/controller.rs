use axum::{Json, extract::State};
use quill_core::{AppError, ErrorResponse};
use quill_models::ProfileResponse;
use tracing::instrument;

use super::service::UserService;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "User profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = UserService::get_user(&state.db, auth_user.user_id).await?;
    Ok(Json(user.into()))
}
