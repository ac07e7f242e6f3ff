use thiserror::Error;

use cvchat_assistant::AssistantError;
use cvchat_persist::PersistError;
use cvchat_search::SearchError;

/// Failure taxonomy of the orchestrator's operations.
///
/// Preconditions are always checked before any network call, so an
/// `InvalidArgument` guarantees no external side effect happened. Nothing
/// is retried automatically at this layer.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("upstream failure: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("persistence failure: {0}")]
    Persistence(#[source] PersistError),

    #[error("thread not found: {0}")]
    NotFound(String),
}

impl SessionError {
    /// Stable wire code for callers mapping failures to an envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Upstream(_) => "upstream_failure",
            Self::Persistence(_) => "persistence_failure",
            Self::NotFound(_) => "not_found",
        }
    }
}

/// Which collaborator an upstream failure came from.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("run failed: {0}")]
    RunFailed(String),
}

impl From<AssistantError> for SessionError {
    fn from(e: AssistantError) -> Self {
        Self::Upstream(UpstreamError::Assistant(e))
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Upstream(UpstreamError::Search(e))
    }
}

impl From<PersistError> for SessionError {
    fn from(e: PersistError) -> Self {
        match e {
            PersistError::ThreadNotFound(id) => Self::NotFound(id),
            other => Self::Persistence(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
