#[derive(Debug)]
pub enum MapsServiceError {
    MissingApiKey,
    Upstream(String),
}

impl std::fmt::Display for MapsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapsServiceError::MissingApiKey => write!(f, "Places API key is not configured"),
            MapsServiceError::Upstream(e) => write!(f, "Upstream error: {}", e),
        }
    }
}
