use std::sync::Arc;

use anyhow::Result;

use taskboard_api::{config::AppConfig, logging, metrics, routes, state::AppState};
use taskboard_db::Database;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // The guard owns the file-sink writer thread; keep it for the process
    // lifetime.
    let _log_guard = logging::init(&config.log_level, &config.log_file, config.debug)?;

    tracing::info!("Starting Taskboard API");

    let metrics_handle = metrics::install_recorder()?;

    // Bounded retry inside; schema bootstrap failure is fatal.
    let db = Database::connect(&config.db).await?;
    db.ensure_schema().await?;

    let state = AppState {
        store: Arc::new(db),
        metrics: metrics_handle,
    };

    let app = routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.api_port);
    tracing::info!("Taskboard API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
