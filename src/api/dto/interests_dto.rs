//! Interests API DTOs
use serde::Serialize;

/// Body of `GET /api/interests`: exactly one of `interests` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum InterestsResponse {
    Interests { interests: Vec<String> },
    Error { error: String },
}
