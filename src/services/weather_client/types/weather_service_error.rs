#[derive(Debug)]
pub enum WeatherServiceError {
    Upstream(String),
    NoMatchingHour(String),
}

impl std::fmt::Display for WeatherServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WeatherServiceError::Upstream(e) => write!(f, "Upstream error: {}", e),
            WeatherServiceError::NoMatchingHour(hour) => {
                write!(f, "No forecast entry at or before {}", hour)
            }
        }
    }
}
