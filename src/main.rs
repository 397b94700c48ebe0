use std::env;

use tokio::net::TcpListener;

use b2b_contributions::api::{AppState, create_router};
use b2b_contributions::config::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
use b2b_contributions::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var(CONFIG_PATH_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = ConfigLoader::load(&config_path)?;
    init_logging(config.logging());

    let bind_address = config.server().bind_address.clone();
    tracing::info!(
        config = %config_path,
        year = config.reference_data().year,
        origins = ?config.server().allowed_origins,
        "Starting contribution calculator"
    );

    let state = AppState::from_config(config)?;
    let router = create_router(state);

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
