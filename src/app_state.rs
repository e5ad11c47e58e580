use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::AppConfig;
use crate::core::persistence::interests::interests_log_repository::InterestsLogRepository;
use crate::domain::interests::service::interests_service::InterestsService;
use crate::domain::viewer::{HttpInterestsClient, InterestsClient};

#[derive(Clone)]
pub struct AppState {
    pub interests_service: Arc<InterestsService<InterestsLogRepository>>,
    pub viewer_client: Arc<dyn InterestsClient>,
    pub page_title: Arc<str>,
}

pub fn build_app_state(config: &AppConfig) -> Result<AppState> {
    let http = Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    Ok(AppState {
        interests_service: Arc::new(InterestsService::new(InterestsLogRepository::new(
            config.interests_log_path.clone(),
        ))),
        viewer_client: Arc::new(HttpInterestsClient::new(http, &config.api_base_url)),
        page_title: Arc::from(config.page_title.as_str()),
    })
}
