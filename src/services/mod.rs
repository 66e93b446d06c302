pub mod completion_client;
pub mod maps_client;
pub mod weather_client;
