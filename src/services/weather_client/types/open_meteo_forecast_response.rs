use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct OpenMeteoForecastResponseHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weather_code: Vec<Option<i64>>,
}

#[derive(Serialize, Deserialize)]
pub struct OpenMeteoForecastResponse {
    pub hourly: OpenMeteoForecastResponseHourly,
}
