use serde::{Deserialize, Serialize};

use super::message::CreateMessageRequest;

/// Request to create a remote thread, optionally seeded with initial messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateThreadRequest {
    pub messages: Vec<CreateMessageRequest>,
}

impl CreateThreadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the thread with a single message.
    pub fn with_message(message: CreateMessageRequest) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

/// Thread as returned by the assistant API. The `id` is assigned remotely
/// and is the only identifier this system ever uses for the thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadObject {
    pub id: String,
    pub object: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedObject {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}
