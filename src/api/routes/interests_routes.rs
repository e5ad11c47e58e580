//! Interests routes (e.g., /api/interests)

use axum::{routing::get, Router};

use crate::api::controller::interests::InterestsController;
use crate::app_state::AppState;

pub fn interests_routes() -> Router<AppState> {
    Router::new().route("/interests", get(InterestsController::list))
}
