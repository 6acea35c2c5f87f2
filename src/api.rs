//! HTTP surface: route table, handlers, and error-to-status mapping.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::cities::{self, City};
use crate::error::PogodaError;
use crate::weather::{self, WeatherClient, WeatherFields};

static INDEX_TEMPLATE: &str = include_str!("index.html");

/// Shared per-process state handed to every handler.
///
/// Nothing here is mutable; handlers stay fully independent.
#[derive(Clone)]
pub struct AppState {
    pub weather: Arc<WeatherClient>,
}

/// The flat JSON object returned by `/weather`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: Number,
    pub humidity: Number,
    pub wind_speed: Number,
}

impl WeatherReport {
    fn new(city: &City, fields: WeatherFields) -> Self {
        Self {
            city: city.display_name.to_string(),
            temperature: fields.temperature,
            humidity: fields.humidity,
            wind_speed: fields.windspeed,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    #[serde(default)]
    city: String,
}

impl IntoResponse for PogodaError {
    fn into_response(self) -> Response {
        let status = match self {
            PogodaError::CityNotFound { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.user_message()).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/weather", get(get_weather))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<String> {
    let options: String = cities::all()
        .iter()
        .map(|city| format!(r#"<option value="{}">{}</option>"#, city.key, city.display_name))
        .collect();
    Html(INDEX_TEMPLATE.replace("{{options}}", &options))
}

async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, PogodaError> {
    let city =
        cities::lookup(&query.city).ok_or_else(|| PogodaError::city_not_found(&query.city))?;

    let raw = state.weather.fetch(city).await.inspect_err(|err| {
        tracing::error!(city = city.key, error = %err, "forecast fetch failed");
    })?;
    let fields = weather::extract(&raw).inspect_err(|err| {
        tracing::error!(city = city.key, error = %err, "forecast extraction failed");
    })?;

    Ok(Json(WeatherReport::new(city, fields)))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy"}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_field_names() {
        let city = cities::lookup("warszawa").unwrap();
        let fields = WeatherFields {
            temperature: Number::from_f64(15.2).unwrap(),
            windspeed: Number::from_f64(10.5).unwrap(),
            humidity: Number::from(72u32),
        };
        let report = serde_json::to_value(WeatherReport::new(city, fields)).unwrap();
        assert_eq!(
            report,
            serde_json::json!({
                "city": "Warszawa",
                "temperature": 15.2,
                "humidity": 72,
                "wind_speed": 10.5
            })
        );
    }

    #[test]
    fn test_error_statuses() {
        let not_found = PogodaError::city_not_found("nowhere").into_response();
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);

        let transport = PogodaError::transport("refused").into_response();
        assert_eq!(transport.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let extraction = PogodaError::extraction("bad shape").into_response();
        assert_eq!(extraction.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
