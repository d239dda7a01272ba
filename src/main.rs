mod bot;
mod config;
mod error;
mod model;
mod service;
mod util;

use dioxus_logger::tracing;

use crate::{
    config::Config, error::AppError, service::relay_config::RelayConfigService,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)
        .map_err(|e| AppError::InternalError(format!("Failed to initialise logger: {}", e)))?;

    // Single relay config store for the process, shared with every event handler
    let relay_config = RelayConfigService::new();

    tracing::info!("Starting wander bot with prefix '{}'", config.command_prefix);

    let client = bot::start::init_bot(&config, relay_config).await?;

    if let Err(e) = bot::start::start_bot(client).await {
        tracing::error!("Discord bot error: {}", e);
        return Err(e);
    }

    Ok(())
}
