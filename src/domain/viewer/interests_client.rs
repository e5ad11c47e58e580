use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Path of the interests endpoint relative to the API base URL.
pub const INTERESTS_ENDPOINT: &str = "/api/interests";

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch interests";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Every way a fetch can fail, collapsed into the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-success HTTP status. The body is never read.
    #[error("Failed to fetch interests")]
    Status { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),

    #[error("An unknown error occurred")]
    Unknown,
}

impl FetchError {
    pub fn transport<E: ToString>(err: E) -> Self {
        Self::with_message(err, Self::Transport)
    }

    pub fn decode<E: ToString>(err: E) -> Self {
        Self::with_message(err, Self::Decode)
    }

    /// Text stored in the view state for this failure.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    fn with_message<E: ToString>(err: E, wrap: fn(String) -> Self) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            wrap(message)
        }
    }
}

/// Source of the interests list for a viewer.
#[async_trait]
pub trait InterestsClient: Send + Sync {
    async fn fetch_interests(&self) -> Result<Vec<String>, FetchError>;
}

/// Fetches interests from the log reader service over HTTP.
///
/// No timeout is configured: a hanging service keeps the fetch pending.
pub struct HttpInterestsClient {
    client: Client,
    endpoint: String,
}

impl HttpInterestsClient {
    pub fn new(client: Client, api_base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}{}",
                api_base_url.trim_end_matches('/'),
                INTERESTS_ENDPOINT
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InterestsClient for HttpInterestsClient {
    async fn fetch_interests(&self) -> Result<Vec<String>, FetchError> {
        debug!(endpoint = %self.endpoint, "Fetching interests");

        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = resp.json().await.map_err(FetchError::decode)?;
        entries_from_body(body)
    }
}

/// Pulls the `interests` list out of a response body.
///
/// Elements are not validated: strings pass through unchanged, anything
/// else passes through as its JSON text.
pub fn entries_from_body(body: Value) -> Result<Vec<String>, FetchError> {
    match body {
        Value::Object(mut map) => match map.remove("interests") {
            Some(Value::Array(items)) => Ok(items.into_iter().map(entry_text).collect()),
            _ => Err(FetchError::Decode(
                "Response did not contain an interests list".to_string(),
            )),
        },
        _ => Err(FetchError::Decode(
            "Response body was not a JSON object".to_string(),
        )),
    }
}

fn entry_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
