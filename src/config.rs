use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::persistence::storage_path::{interests_log_path, DEFAULT_INTERESTS_LOG_PATH};
use crate::domain::viewer::render::DEFAULT_PAGE_TITLE;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read from the environment (and `.env`) at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Resolved against the working directory at startup.
    pub interests_log_path: PathBuf,
    /// Base URL the viewer fetches `/api/interests` from.
    pub api_base_url: String,
    pub page_title: String,
    /// When set, logs are also written to a daily rolling file here.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("INTERESTS_VIEWER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("INTERESTS_VIEWER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid INTERESTS_VIEWER_PORT: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let configured_path = get("INTERESTS_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INTERESTS_LOG_PATH));
        let interests_log_path = interests_log_path(Path::new(&configured_path))?;

        let api_base_url = get("INTERESTS_VIEWER_API_BASE_URL")
            .unwrap_or_else(|| default_api_base_url(&host, port));
        let page_title =
            get("INTERESTS_VIEWER_TITLE").unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string());
        let log_dir = get("INTERESTS_VIEWER_LOG_DIR").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            interests_log_path,
            api_base_url,
            page_title,
            log_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The viewer fetches from its own server unless told otherwise. Wildcard
/// binds are reached over loopback.
fn default_api_base_url(host: &str, port: u16) -> String {
    match host {
        "0.0.0.0" => format!("http://127.0.0.1:{port}"),
        "::" | "[::]" => format!("http://[::1]:{port}"),
        h if h.contains(':') && !h.starts_with('[') => format!("http://[{h}]:{port}"),
        h => format!("http://{h}:{port}"),
    }
}
