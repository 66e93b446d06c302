use chrono::{DateTime, Utc};
use urlencoding::encode;

use super::{
    current_hour::{current_hour_iso, resolve_current_hour_index},
    types::{
        open_meteo_forecast_response::OpenMeteoForecastResponse,
        weather_service_error::WeatherServiceError,
    },
    weather_code::describe_weather_code,
};

#[derive(Clone)]
pub struct WeatherServiceConfig {
    pub host: String,
}

#[derive(Clone)]
pub struct WeatherService {
    config: WeatherServiceConfig,
    client: reqwest::Client,
}

pub struct CurrentWeather {
    /// Hour the lookup targeted, `now` truncated to the hour.
    pub current_hour: String,
    /// Timestamp of the forecast entry that was used.
    pub time: String,
    pub temperature: Option<f64>,
    pub condition: String,
}

impl WeatherService {
    pub fn new(config: WeatherServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Fetches the hourly forecast for the coordinates and extracts the entry
    /// for the hour containing `now` (or the closest earlier one).
    pub async fn fetch_current_weather(
        &self,
        lat: &str,
        lon: &str,
        now: DateTime<Utc>,
    ) -> Result<CurrentWeather, WeatherServiceError> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly=temperature_2m,weather_code&timezone=auto",
            self.config.host,
            encode(lat),
            encode(lon),
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| WeatherServiceError::Upstream(format!("Failed to send request: {}", e)))?;

        let body = resp
            .json::<OpenMeteoForecastResponse>()
            .await
            .map_err(|e| {
                WeatherServiceError::Upstream(format!("Failed to get response body: {}", e))
            })?;

        let current_hour = current_hour_iso(now);
        let hourly = body.hourly;

        let index = resolve_current_hour_index(&hourly.time, &current_hour)
            .ok_or_else(|| WeatherServiceError::NoMatchingHour(current_hour.clone()))?;

        let (temperature, code) = match (
            hourly.temperature_2m.get(index),
            hourly.weather_code.get(index),
        ) {
            (Some(temperature), Some(code)) => (*temperature, *code),
            _ => {
                return Err(WeatherServiceError::Upstream(format!(
                    "Forecast series misaligned at index {}",
                    index
                )))
            }
        };

        Ok(CurrentWeather {
            current_hour,
            time: hourly.time[index].clone(),
            temperature,
            condition: code
                .map(describe_weather_code)
                .unwrap_or("Unknown")
                .to_string(),
        })
    }
}
