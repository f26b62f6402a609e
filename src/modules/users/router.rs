use axum::{Router, routing::get};

use super::controller::get_profile;
use crate::state::AppState;

/// Routes for the authenticated user; mounted behind `require_auth`.
pub fn init_profile_router() -> Router<AppState> {
    Router::new().route("/", get(get_profile))
}
