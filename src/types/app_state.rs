use crate::services::{
    completion_client::completion_service::CompletionService,
    maps_client::maps_service::MapsService, weather_client::weather_service::WeatherService,
};

#[derive(Clone)]
pub struct AppState {
    pub weather_service: WeatherService,
    pub completion_service: CompletionService,
    pub maps_service: MapsService,
}
