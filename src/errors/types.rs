use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmPingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmPingError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            LlmPingError::Config(_) => 2,
            LlmPingError::Network(_) => 3,
            LlmPingError::Authentication(_) => 4,
            _ => 1,
        }
    }
}
