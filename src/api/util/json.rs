use anyhow::Result;
use axum::Json;
use tracing::warn;

use crate::api::dto::interests_dto::InterestsResponse;
use crate::errors::AppError;

/// Map a domain read result into the interests response, collapsing every
/// failure into [`AppError::InterestsReadFailure`].
pub fn to_interests_json(
    result: Result<Vec<String>>,
) -> Result<Json<InterestsResponse>, AppError> {
    match result {
        Ok(interests) => Ok(Json(InterestsResponse::Interests { interests })),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "Failed to read interests log");
            Err(AppError::InterestsReadFailure)
        }
    }
}
