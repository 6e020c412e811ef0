use axum_helpers::server::create_production_app;
use core_config::tracing::{banner, init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);
    banner(&format!("{} v{}", config.app.name, config.app.version));

    info!(uri = %config.mongodb.redacted_uri(), "Connecting to MongoDB");

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(&config.mongodb.database_name());

    info!(database = db.name(), "Successfully connected to MongoDB");

    let server_config = config.server.clone();
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = api::app(&state)?;

    let mongo_client = state.mongo_client.clone();
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        mongo_client.shutdown().await;
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("PetCare API shutdown complete");
    Ok(())
}
