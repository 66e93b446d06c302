use crate::{
    services::weather_client::types::weather_service_error::WeatherServiceError,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

/// Absent coordinates default to empty so that missing and blank values fail
/// the same length check.
#[derive(Validate, Deserialize)]
pub struct GetWeatherPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Latitude and longitude are required"))]
    pub lat: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Latitude and longitude are required"))]
    pub lon: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetWeatherResponseCurrentWeather {
    pub time: String,
    pub temperature: Option<f64>,
    pub condition: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetWeatherResponse {
    pub current_weather: GetWeatherResponseCurrentWeather,
}

/// Maps a failed weather lookup onto the HTTP error surface shared by the
/// weather and suggestion routes.
pub fn weather_error_response(e: WeatherServiceError) -> AppError {
    match e {
        WeatherServiceError::NoMatchingHour(hour) => {
            error!("No forecast entry for current hour {}", hour);
            AppError::not_found("No matching weather data found for the current hour")
        }
        WeatherServiceError::Upstream(cause) => {
            error!("Failed to fetch weather data: {}", cause);
            AppError::upstream(&format!("Failed to fetch weather data: {}", cause))
        }
    }
}

#[cfg_attr(test, debug_handler)]
pub async fn get_weather(
    State(state): State<AppState>,
    ValidatedQuery(GetWeatherPayload { lat, lon }): ValidatedQuery<GetWeatherPayload>,
) -> Result<Response, AppError> {
    let weather = state
        .weather_service
        .fetch_current_weather(&lat, &lon, Utc::now())
        .await
        .map_err(weather_error_response)?;

    Ok((
        StatusCode::OK,
        Json(GetWeatherResponse {
            current_weather: GetWeatherResponseCurrentWeather {
                time: weather.time,
                temperature: weather.temperature,
                condition: weather.condition,
            },
        }),
    )
        .into_response())
}
