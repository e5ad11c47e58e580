//! Interests controller: connects routes to the log reader service

use axum::extract::State;
use axum::Json;

use crate::api::dto::interests_dto::InterestsResponse;
use crate::api::util::json::to_interests_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct InterestsController;

impl InterestsController {
    pub async fn list(
        State(state): State<AppState>,
    ) -> Result<Json<InterestsResponse>, AppError> {
        to_interests_json(state.interests_service.list_interests().await)
    }
}
