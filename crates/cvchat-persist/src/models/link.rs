use serde::{Deserialize, Serialize};

/// Association between a thread and a resume that was part of its seed
/// context. Created once at session start, immutable, deleted together
/// with the owning thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadResumeLink {
    pub thread_id: String,
    pub resume_id: String,
}

impl ThreadResumeLink {
    pub fn new(thread_id: impl Into<String>, resume_id: impl Into<String>) -> Self {
        Self {
            thread_id: thread_id.into(),
            resume_id: resume_id.into(),
        }
    }
}
