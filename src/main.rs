use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pogoda_web::api::{self, AppState};
use pogoda_web::config::AppConfig;
use pogoda_web::weather::WeatherClient;
use pogoda_web::web;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        version = pogoda_web::VERSION,
        port = config.server.port,
        provider = %config.weather.base_url,
        "starting pogoda-web"
    );

    let state = AppState {
        weather: Arc::new(WeatherClient::new(&config.weather)),
    };
    web::run(&config, api::router(state)).await
}
