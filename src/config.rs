//! Configuration for the `pogoda-web` service
//!
//! All settings come from the process environment with defaults; the
//! resulting struct is built once in `main` and handed to the web layer
//! explicitly rather than living in ambient globals.

use serde::{Deserialize, Serialize};

use crate::error::PogodaError;

/// Root configuration structure for the `pogoda-web` service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Weather provider configuration
    pub weather: WeatherConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port, bound on all interfaces
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Weather provider configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the forecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: default_port(),
            },
            weather: WeatherConfig {
                base_url: default_weather_base_url(),
            },
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `PORT` overrides the listen port and `WEATHER_BASE_URL` the
    /// forecast provider endpoint.
    pub fn from_env() -> Result<Self, PogodaError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => default_port(),
        };
        let base_url =
            std::env::var("WEATHER_BASE_URL").unwrap_or_else(|_| default_weather_base_url());

        Ok(Self {
            server: ServerConfig { port },
            weather: WeatherConfig { base_url },
        })
    }
}

fn parse_port(raw: &str) -> Result<u16, PogodaError> {
    raw.parse::<u16>()
        .map_err(|_| PogodaError::config(format!("invalid PORT value: {raw}")))
}
