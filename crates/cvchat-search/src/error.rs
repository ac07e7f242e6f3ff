use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Non-success HTTP status from the search index, with the raw body text.
    #[error("search index error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("invalid API key format")]
    InvalidApiKey,
}

pub type Result<T> = std::result::Result<T, SearchError>;
