use std::error::Error;

use api::core::app_state::ServerConfig;
use serp_api_service::{config::default_config::config_from_env, telemetry};
use tracing::{Level, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Values from the process environment win over `.env`; the file is optional.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level("warn", Level::INFO))
        .with(telemetry::layer())
        .try_init()?;

    if let Err(err) = dotenv {
        info!(reason = %err, ".env not loaded, using process environment");
    }

    let serp = config_from_env()?;
    info!(api_key = %serp.masked_key(), base_url = %serp.base_url, "SerpApi config loaded");

    let server = ServerConfig::from_env()?;

    api::start(server, serp).await?;

    Ok(())
}
