use urlencoding::encode;

use super::types::maps_service_error::MapsServiceError;

#[derive(Clone)]
pub struct MapsServiceConfig {
    pub api_key: Option<String>,
    pub host: String,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

pub struct NearbySearchInput {
    pub location: String,
    pub radius: String,
    pub keyword: Option<String>,
    pub place_type: Option<String>,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Runs a nearby search and hands back the upstream body untouched.
    pub async fn nearby_search(
        &self,
        input: NearbySearchInput,
    ) -> Result<serde_json::Value, MapsServiceError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(MapsServiceError::MissingApiKey),
        };

        let mut url = format!(
            "{}/maps/api/place/nearbysearch/json?location={}&radius={}",
            self.config.host,
            encode(&input.location),
            encode(&input.radius),
        );
        if let Some(keyword) = &input.keyword {
            url.push_str(&format!("&keyword={}", encode(keyword)));
        }
        if let Some(place_type) = &input.place_type {
            url.push_str(&format!("&type={}", encode(place_type)));
        }
        url.push_str(&format!("&key={}", encode(api_key)));

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                MapsServiceError::Upstream(format!(
                    "Failed to send request: {}",
                    e.without_url()
                ))
            })?;

        resp.json::<serde_json::Value>().await.map_err(|e| {
            MapsServiceError::Upstream(format!(
                "Failed to get response body: {}",
                e.without_url()
            ))
        })
    }
}
