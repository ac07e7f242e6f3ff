use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local bookkeeping for a remote thread.
///
/// The id is assigned by the external assistant service at creation time
/// and is never generated locally; the display name is a local-only
/// concept the remote service never sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ThreadRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
