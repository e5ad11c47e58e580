use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::api::dto::interests_dto::InterestsResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, unreadable or otherwise broken interests log. The cause is
    /// logged where it happens and never reaches the client.
    #[error("Failed to read interests log.")]
    InterestsReadFailure,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::InterestsReadFailure => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(InterestsResponse::Error {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn read_failure_is_a_fixed_500() {
        let response = AppError::InterestsReadFailure.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], br#"{"error":"Failed to read interests log."}"#);
    }
}
