use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ThreadRecord, ThreadResumeLink};

/// CRUD over local thread records.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Insert a new thread row.
    async fn create(&self, thread: ThreadRecord) -> Result<ThreadRecord>;

    /// Look up a thread by its external id.
    async fn find_by_id(&self, thread_id: &str) -> Result<Option<ThreadRecord>>;

    /// Update the display name, touching `updated_at`.
    ///
    /// Errors with `ThreadNotFound` when no row matches.
    async fn update_name(&self, thread_id: &str, name: &str) -> Result<()>;

    /// All threads, most recently updated first. Ordering is stable
    /// between calls with no intervening writes.
    async fn list_all(&self) -> Result<Vec<ThreadRecord>>;

    /// Delete a thread row and, by the link lifecycle rule, its link rows.
    ///
    /// Errors with `ThreadNotFound` when no row matches.
    async fn delete(&self, thread_id: &str) -> Result<()>;
}

/// Append-only thread↔resume association records.
#[async_trait]
pub trait ThreadLinkRepository: Send + Sync {
    async fn create(&self, link: ThreadResumeLink) -> Result<ThreadResumeLink>;

    /// Resume ids linked to a thread, in insertion order.
    async fn list_resume_ids(&self, thread_id: &str) -> Result<Vec<String>>;
}
