use async_trait::async_trait;

use crate::error::Result;
use crate::types::ResumeSummary;

/// Seam between the orchestrator and the document search index.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a batch of resume summaries in one round trip.
    ///
    /// The batch is all-or-nothing: a missing or unreadable document fails
    /// the whole call. Lenient per-document resolution belongs to callers
    /// that use `fetch_by_id` in a loop.
    async fn fetch_by_ids(&self, index: &str, ids: &[String]) -> Result<Vec<ResumeSummary>>;

    /// Fetch a single resume summary.
    async fn fetch_by_id(&self, index: &str, id: &str) -> Result<ResumeSummary>;
}
