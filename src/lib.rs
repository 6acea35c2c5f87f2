//! `pogoda-web` - city weather lookup service
//!
//! This library provides a fixed directory of supported cities, an
//! Open-Meteo forecast client, and a small axum front end that reports
//! current temperature, relative humidity, and wind speed for a city.

pub mod api;
pub mod cities;
pub mod config;
pub mod error;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::{AppState, WeatherReport};
pub use cities::City;
pub use config::AppConfig;
pub use error::PogodaError;
pub use weather::{WeatherClient, WeatherFields};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PogodaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
