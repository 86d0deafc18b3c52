use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tour_pricing::config::Config;
use tour_pricing::pricing::PricingEngine;
use tour_pricing::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tour_pricing=debug,tower_http=debug")
        }))
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "loaded configuration");

    let state = AppState {
        engine: PricingEngine::new(config.limits),
    };

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
