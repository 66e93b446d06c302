pub mod current_hour;
pub mod types;
pub mod weather_code;
pub mod weather_service;
