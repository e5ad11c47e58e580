use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use interests_viewer::app_state::build_app_state;
use interests_viewer::config::AppConfig;
use interests_viewer::logging::init_tracing;
use interests_viewer::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _log_guard = init_tracing(config.log_dir.as_deref())?;

    info!(
        path = %config.interests_log_path.display(),
        api_base_url = %config.api_base_url,
        "Serving interests log"
    );

    let state = build_app_state(&config)?;
    let app = app_router().with_state(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("🚀 interests-viewer listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
