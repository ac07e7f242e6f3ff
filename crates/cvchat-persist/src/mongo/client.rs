use mongodb::Client;

use crate::error::{PersistError, Result};
use crate::mongo::repositories::{MongoThreadLinkRepository, MongoThreadRepository};

/// Connected MongoDB store bundling both repositories.
pub struct MongoStore {
    thread_repo: MongoThreadRepository,
    link_repo: MongoThreadLinkRepository,
}

impl MongoStore {
    pub async fn connect(mongodb_uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        Ok(Self {
            thread_repo: MongoThreadRepository::new(&client, db_name),
            link_repo: MongoThreadLinkRepository::new(&client, db_name),
        })
    }

    pub fn threads(&self) -> MongoThreadRepository {
        self.thread_repo.clone()
    }

    pub fn links(&self) -> MongoThreadLinkRepository {
        self.link_repo.clone()
    }
}
