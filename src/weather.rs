//! Open-Meteo forecast client and response extraction.
//!
//! Fetching and extraction are separate steps with separate failure
//! categories: anything that goes wrong on the wire is a transport error,
//! anything wrong with the payload shape is an extraction error.

use serde::Deserialize;
use serde_json::Number;

use crate::Result;
use crate::cities::City;
use crate::config::WeatherConfig;
use crate::error::PogodaError;

/// The scalar fields pulled out of a provider payload.
///
/// Values stay raw JSON numbers so the client sees exactly what the
/// provider sent (an integral humidity reading stays integral).
#[derive(Debug, Clone)]
pub struct WeatherFields {
    pub temperature: Number,
    pub windspeed: Number,
    pub humidity: Number,
}

/// Client for the forecast provider.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    #[must_use]
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn forecast_url(&self, city: &City) -> String {
        format!(
            "{}/forecast?latitude={:.4}&longitude={:.4}&current_weather=true&hourly=relative_humidity_2m",
            self.base_url, city.latitude, city.longitude
        )
    }

    /// Fetch the raw forecast document for a city.
    ///
    /// Single call, no retries, no timeout beyond the platform default.
    /// Any network failure surfaces as [`PogodaError::Transport`].
    pub async fn fetch(&self, city: &City) -> Result<String> {
        let url = self.forecast_url(city);
        tracing::debug!(city = city.key, %url, "requesting forecast");
        let response = self.http.get(&url).send().await?;
        let body = response.text().await?;
        Ok(body)
    }
}

/// `OpenMeteo` response structures for the subset of the forecast payload
/// this service consumes. Every field is optional so a malformed upstream
/// document fails extraction instead of crashing the handler.
mod open_meteo {
    use serde::Deserialize;
    use serde_json::Number;

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeather>,
        pub hourly: Option<HourlySeries>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: Option<Number>,
        pub windspeed: Option<Number>,
    }

    #[derive(Debug, Deserialize)]
    pub struct HourlySeries {
        pub relative_humidity_2m: Option<Vec<Number>>,
    }
}

/// Pull the reported fields out of a raw provider document.
///
/// The humidity value is the first element of the hourly series; it is not
/// aligned to the `current_weather` timestamp.
pub fn extract(raw: &str) -> Result<WeatherFields> {
    let payload: open_meteo::ForecastResponse = serde_json::from_str(raw)
        .map_err(|err| PogodaError::extraction(format!("malformed forecast payload: {err}")))?;

    let current = payload
        .current_weather
        .ok_or_else(|| PogodaError::extraction("missing current_weather"))?;
    let temperature = current
        .temperature
        .ok_or_else(|| PogodaError::extraction("missing current_weather.temperature"))?;
    let windspeed = current
        .windspeed
        .ok_or_else(|| PogodaError::extraction("missing current_weather.windspeed"))?;
    let humidity = payload
        .hourly
        .and_then(|hourly| hourly.relative_humidity_2m)
        .ok_or_else(|| PogodaError::extraction("missing hourly.relative_humidity_2m"))?
        .into_iter()
        .next()
        .ok_or_else(|| PogodaError::extraction("empty hourly.relative_humidity_2m series"))?;

    Ok(WeatherFields {
        temperature,
        windspeed,
        humidity,
    })
}
