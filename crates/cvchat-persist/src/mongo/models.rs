use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ThreadRecord, ThreadResumeLink};

/// MongoDB-specific thread document. The external thread id is the `_id`;
/// timestamps are stored as native BSON datetimes so `updated_at` sorting
/// happens server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoThread {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoThreadLink {
    pub thread_id: String,
    pub resume_id: String,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<ThreadRecord> for MongoThread {
    fn from(thread: ThreadRecord) -> Self {
        Self {
            id: thread.id,
            name: thread.name,
            created_at: thread.created_at,
            updated_at: thread.updated_at,
        }
    }
}

impl From<MongoThread> for ThreadRecord {
    fn from(thread: MongoThread) -> Self {
        Self {
            id: thread.id,
            name: thread.name,
            created_at: thread.created_at,
            updated_at: thread.updated_at,
        }
    }
}

impl From<ThreadResumeLink> for MongoThreadLink {
    fn from(link: ThreadResumeLink) -> Self {
        Self {
            thread_id: link.thread_id,
            resume_id: link.resume_id,
        }
    }
}

impl From<MongoThreadLink> for ThreadResumeLink {
    fn from(link: MongoThreadLink) -> Self {
        Self {
            thread_id: link.thread_id,
            resume_id: link.resume_id,
        }
    }
}
