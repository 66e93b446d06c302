pub mod open_meteo_forecast_response;
pub mod weather_service_error;
