use anyhow::Context;
use storyboard::config::ConfigLoader;
use storyboard::observability::init_tracing;
use storyboard::server::{build_router, build_store, serve};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config)?;
    init_tracing(&config.logging)?;

    info!(
        "Starting {} ({} environment)...",
        config.app_name, config.environment
    );

    let store = build_store(&config);
    let router = build_router(&config, store);
    info!("Router created with observability endpoints");

    serve(&config, router).await?;

    Ok(())
}
