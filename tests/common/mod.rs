#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;

use interests_viewer::app_state::build_app_state;
use interests_viewer::config::AppConfig;
use interests_viewer::routes::app_router;

/// Config pointing at `log_path`, with the viewer fetching from `api_base_url`.
pub fn test_config(log_path: PathBuf, api_base_url: &str) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        interests_log_path: log_path,
        api_base_url: api_base_url.to_string(),
        page_title: "Self-Protocol Viewer".to_string(),
        log_dir: None,
    }
}

pub fn test_router(log_path: PathBuf) -> Router {
    let config = test_config(log_path, "http://127.0.0.1:1");
    app_router().with_state(build_app_state(&config).unwrap())
}

/// Starts a real server on an ephemeral port whose viewer fetches from itself.
/// Returns the base URL.
pub async fn spawn_server(log_path: PathBuf) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let config = test_config(log_path, &base_url);
    let app = app_router().with_state(build_app_state(&config).unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url
}
