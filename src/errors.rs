use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Failed to send HTTP request: {0}")]
    Transport(String),

    #[error("API returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to decode API response: {0}")]
    Decode(String),

    #[error("No videos found for channel {0}")]
    NotFound(String),

    #[error("Model returned no content: {0}")]
    EmptyResult(String),

    #[error("Failed to authenticate with Discord: {0}")]
    Auth(String),

    #[error("Failed to deliver message: {0}")]
    Delivery(String),

    #[error("Failed to parse timestamp: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ShareError {
    /// Status code carried by an `Upstream` error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ShareError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ShareError {
    fn from(error: reqwest::Error) -> Self {
        ShareError::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(error: serde_json::Error) -> Self {
        ShareError::Decode(error.to_string())
    }
}

impl From<chrono::ParseError> for ShareError {
    fn from(error: chrono::ParseError) -> Self {
        ShareError::Parse(error.to_string())
    }
}
