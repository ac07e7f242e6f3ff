use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// Non-success HTTP status from the assistant API, with the raw body text.
    #[error("assistant API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid API key format")]
    InvalidApiKey,
}

pub type Result<T> = std::result::Result<T, AssistantError>;
