use crate::{
    routes::get_weather::{weather_error_response, GetWeatherPayload},
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

#[derive(Serialize, Deserialize)]
pub struct GetSuggestionsResponse {
    pub suggestions: String,
}

fn build_activity_prompt(temperature: Option<f64>, condition: &str, hour: &str) -> String {
    let temperature = match temperature {
        Some(t) => format!("{}°C", t),
        None => "an unknown temperature".to_string(),
    };

    format!(
        "Suggest one outdoor fun activity for someone in a location with a temperature of {} \
         and {} weather at {}. Make the suggestion unique and weather-appropriate. Also, \
         extract keywords for the suggestion that can be used to search for nearby places.",
        temperature, condition, hour
    )
}

#[cfg_attr(test, debug_handler)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    ValidatedQuery(GetWeatherPayload { lat, lon }): ValidatedQuery<GetWeatherPayload>,
) -> Result<Response, AppError> {
    let weather = state
        .weather_service
        .fetch_current_weather(&lat, &lon, Utc::now())
        .await
        .map_err(weather_error_response)?;

    let prompt = build_activity_prompt(
        weather.temperature,
        &weather.condition,
        &weather.current_hour,
    );

    let suggestions = state
        .completion_service
        .complete(&prompt)
        .await
        .map_err(|e| {
            error!("Failed to generate suggestions: {}", e);
            AppError::upstream(&format!("Failed to generate suggestions: {}", e))
        })?;

    Ok((StatusCode::OK, Json(GetSuggestionsResponse { suggestions })).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::Duration;
    use mockito::Matcher;
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        app::gen_mock_app, services::weather_client::current_hour::current_hour_iso,
        utils::app_error::ErrorResponse,
    };

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn clear_sky_forecast() -> String {
        json!({
            "hourly": {
                "time": [current_hour_iso(Utc::now())],
                "temperature_2m": [25.0],
                "weather_code": [0]
            }
        })
        .to_string()
    }

    #[test]
    fn prompt_embeds_weather() {
        let prompt = build_activity_prompt(Some(25.0), "Clear sky", "2023-10-25T21:00");

        assert!(prompt.contains("temperature of 25°C and Clear sky weather at 2023-10-25T21:00"));
        assert!(prompt.contains("keywords"));
    }

    #[test]
    fn prompt_without_temperature() {
        let prompt = build_activity_prompt(None, "Unknown", "2023-10-25T21:00");
        assert!(prompt.contains("an unknown temperature and Unknown weather"));
    }

    #[tokio::test]
    async fn relays_trimmed_completion() {
        let mut mock_app = gen_mock_app().await;

        let weather_mock = mock_app
            .weather_server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(clear_sky_forecast())
            .create_async()
            .await;

        let completion_mock = mock_app
            .openai_server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer openai-key")
            .match_body(Matcher::Regex("25°C and Clear sky weather".to_string()))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{
                        "index": 0,
                        "message": {
                            "role": "assistant",
                            "content": "\nGo for a picnic... keywords: park, picnic  "
                        }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(request("/suggestions?lat=40.7&lon=-74.0"))
            .await
            .unwrap();

        weather_mock.assert_async().await;
        completion_mock.assert_async().await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body,
            json!({ "suggestions": "Go for a picnic... keywords: park, picnic" })
        );
    }

    #[tokio::test]
    async fn prompt_names_current_hour_when_falling_back() {
        let mut mock_app = gen_mock_app().await;

        let now = Utc::now();
        let earlier_hour = current_hour_iso(now - Duration::hours(2));
        let current_hour = current_hour_iso(now);

        mock_app
            .weather_server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::Any)
            .with_body(
                json!({
                    "hourly": {
                        "time": [earlier_hour],
                        "temperature_2m": [25.0],
                        "weather_code": [0]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let completion_mock = mock_app
            .openai_server
            .mock("POST", "/v1/chat/completions")
            .match_body(Matcher::Regex(format!(
                "Clear sky weather at {}",
                current_hour
            )))
            .with_body(
                json!({ "choices": [{ "message": { "content": "Fly a kite" } }] }).to_string(),
            )
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(request("/suggestions?lat=40.7&lon=-74.0"))
            .await
            .unwrap();

        completion_mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn future_only_forecast_is_not_found() {
        let mut mock_app = gen_mock_app().await;

        let later = current_hour_iso(Utc::now() + Duration::hours(3));

        mock_app
            .weather_server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::Any)
            .with_body(
                json!({
                    "hourly": {
                        "time": [later],
                        "temperature_2m": [12.0],
                        "weather_code": [2]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let completion_mock = mock_app
            .openai_server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(request("/suggestions?lat=40.7&lon=-74.0"))
            .await
            .unwrap();

        completion_mock.assert_async().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body.message,
            "No matching weather data found for the current hour"
        );
    }

    #[tokio::test]
    async fn missing_coordinates_are_rejected() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(request("/suggestions?lat=40.7"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn completion_failure_is_internal_error() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .weather_server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::Any)
            .with_body(clear_sky_forecast())
            .create_async()
            .await;

        mock_app
            .openai_server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_body(json!({ "error": { "message": "quota exceeded" } }).to_string())
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(request("/suggestions?lat=40.7&lon=-74.0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert!(body.message.starts_with("Failed to generate suggestions"));
        assert!(body.message.contains("429"));
    }

    #[tokio::test]
    async fn weather_failure_skips_completion() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .weather_server
            .mock("GET", "/v1/forecast")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let completion_mock = mock_app
            .openai_server
            .mock("POST", "/v1/chat/completions")
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(request("/suggestions?lat=40.7&lon=-74.0"))
            .await
            .unwrap();

        completion_mock.assert_async().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert!(body.message.starts_with("Failed to fetch weather data"));
    }
}
