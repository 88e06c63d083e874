use anyhow::{Context, Result};
use persistence::Database;
use tracing::info;

use tareas_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics().context("Failed to install Prometheus recorder")?;

    info!("Starting Tareas API v{}", env!("CARGO_PKG_VERSION"));

    let db = Database::from_config(&config.database)?;

    if config.database.ensure_on_startup {
        info!("Ensuring database schema before serving");
        db.ensure_schema().await?;
    }

    let addr = config
        .socket_addr()
        .context("Invalid server host or port")?;
    let app = app::create_app(config, db);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
