#[derive(Debug)]
pub enum CompletionServiceError {
    Upstream(String),
    EmptyCompletion,
}

impl std::fmt::Display for CompletionServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CompletionServiceError::Upstream(e) => write!(f, "Upstream error: {}", e),
            CompletionServiceError::EmptyCompletion => {
                write!(f, "Completion response contained no message content")
            }
        }
    }
}
