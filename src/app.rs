use std::time::Duration;

use axum::{http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    routes::apply_routes,
    services::{
        completion_client::completion_service::{CompletionService, CompletionServiceConfig},
        maps_client::maps_service::{MapsService, MapsServiceConfig},
        weather_client::weather_service::{WeatherService, WeatherServiceConfig},
    },
    types::app_state::AppState,
};

const DEFAULT_OPEN_METEO_HOST: &str = "https://api.open-meteo.com";
const DEFAULT_OPENAI_HOST: &str = "https://api.openai.com";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAPS_HOST: &str = "https://maps.googleapis.com";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct AppConfig {
    pub weather_host: String,
    pub openai_host: String,
    pub openai_key: String,
    pub openai_model: String,
    pub maps_host: String,
    pub maps_key: Option<String>,
    pub request_timeout: Duration,
    pub bind_address: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { name: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value for {}: {:?}", name, value)
            }
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let request_timeout = match var("REQUEST_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "REQUEST_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            weather_host: var("OPEN_METEO_HOST").unwrap_or(DEFAULT_OPEN_METEO_HOST.to_string()),
            openai_host: var("OPENAI_HOST").unwrap_or(DEFAULT_OPENAI_HOST.to_string()),
            openai_key: var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: var("OPENAI_MODEL").unwrap_or(DEFAULT_OPENAI_MODEL.to_string()),
            maps_host: var("GOOGLE_MAPS_HOST").unwrap_or(DEFAULT_MAPS_HOST.to_string()),
            maps_key: var("GOOGLE_MAPS_API_KEY"),
            request_timeout,
            bind_address: var("BIND_ADDRESS").unwrap_or(DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

pub fn gen_app(config: AppConfig) -> Result<Router, reqwest::Error> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let state = AppState {
        weather_service: WeatherService::new(
            WeatherServiceConfig {
                host: config.weather_host,
            },
            client.clone(),
        ),
        completion_service: CompletionService::new(
            CompletionServiceConfig {
                api_key: config.openai_key,
                host: config.openai_host,
                model: config.openai_model,
            },
            client.clone(),
        ),
        maps_service: MapsService::new(
            MapsServiceConfig {
                api_key: config.maps_key,
                host: config.maps_host,
            },
            client,
        ),
    };

    let cors_middleware = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Ok(apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state))
}

async fn root() -> &'static str {
    "Welcome to the Local Explorer Backend!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub weather_server: mockito::ServerGuard,
    pub openai_server: mockito::ServerGuard,
    pub google_server: mockito::ServerGuard,
}

/// App wired to three mock upstreams.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_maps_key(Some("maps-key".to_string())).await
}

#[cfg(test)]
pub async fn gen_mock_app_with_maps_key(maps_key: Option<String>) -> MockApp {
    let weather_server = mockito::Server::new_async().await;
    let openai_server = mockito::Server::new_async().await;
    let google_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        weather_host: weather_server.url(),
        openai_host: openai_server.url(),
        openai_key: "openai-key".to_string(),
        openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        maps_host: google_server.url(),
        maps_key,
        request_timeout: Duration::from_secs(5),
        bind_address: DEFAULT_BIND_ADDRESS.to_string(),
    })
    .unwrap();

    MockApp {
        app,
        weather_server,
        openai_server,
        google_server,
    }
}
