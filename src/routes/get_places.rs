use crate::{
    services::maps_client::{
        maps_service::NearbySearchInput, types::maps_service_error::MapsServiceError,
    },
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
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlacesPayload {
    /// `lat,lng`
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub location: String,

    /// Metres.
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub radius: String,

    pub keyword: Option<String>,

    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_places(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlacesPayload>,
) -> Result<Response, AppError> {
    let places = state
        .maps_service
        .nearby_search(NearbySearchInput {
            location: payload.location,
            radius: payload.radius,
            keyword: payload.keyword.filter(|k| !k.is_empty()),
            place_type: payload.place_type.filter(|t| !t.is_empty()),
        })
        .await
        .map_err(|e| match e {
            MapsServiceError::MissingApiKey => {
                error!("Places request rejected: {}", e);
                AppError::invalid_request("Missing required parameters: location, radius, or key")
            }
            MapsServiceError::Upstream(_) => {
                error!("Failed to fetch places: {}", e);
                AppError::upstream(&format!("Failed to fetch places: {}", e))
            }
        })?;

    Ok((StatusCode::OK, Json(places)).into_response())
}
