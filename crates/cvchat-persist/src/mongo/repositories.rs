use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::error::{PersistError, Result};
use crate::models::{ThreadRecord, ThreadResumeLink};
use crate::mongo::models::{MongoThread, MongoThreadLink};
use crate::traits::{ThreadLinkRepository, ThreadRepository};

const THREADS_COLLECTION: &str = "threads";
const LINKS_COLLECTION: &str = "thread_resumes";

#[derive(Clone)]
pub struct MongoThreadRepository {
    threads: Collection<MongoThread>,
    // Held for the delete cascade over link rows.
    links: Collection<MongoThreadLink>,
}

impl MongoThreadRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let db = client.database(db_name);
        Self {
            threads: db.collection(THREADS_COLLECTION),
            links: db.collection(LINKS_COLLECTION),
        }
    }
}

#[async_trait]
impl ThreadRepository for MongoThreadRepository {
    async fn create(&self, thread: ThreadRecord) -> Result<ThreadRecord> {
        let doc: MongoThread = thread.clone().into();
        self.threads.insert_one(&doc).await?;
        Ok(thread)
    }

    async fn find_by_id(&self, thread_id: &str) -> Result<Option<ThreadRecord>> {
        let filter = doc! { "_id": thread_id };
        let found = self.threads.find_one(filter).await?;
        Ok(found.map(Into::into))
    }

    async fn update_name(&self, thread_id: &str, name: &str) -> Result<()> {
        let filter = doc! { "_id": thread_id };
        let update = doc! {
            "$set": {
                "name": name,
                "updated_at": bson::DateTime::now(),
            }
        };

        let result = self.threads.update_one(filter, update).await?;
        if result.matched_count == 0 {
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ThreadRecord>> {
        let threads: Vec<MongoThread> = self
            .threads
            .find(doc! {})
            .sort(doc! { "updated_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(threads.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, thread_id: &str) -> Result<()> {
        let result = self.threads.delete_one(doc! { "_id": thread_id }).await?;
        if result.deleted_count == 0 {
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }

        // Link rows share the thread's lifecycle.
        self.links
            .delete_many(doc! { "thread_id": thread_id })
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct MongoThreadLinkRepository {
    links: Collection<MongoThreadLink>,
}

impl MongoThreadLinkRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let links = client.database(db_name).collection(LINKS_COLLECTION);
        Self { links }
    }
}

#[async_trait]
impl ThreadLinkRepository for MongoThreadLinkRepository {
    async fn create(&self, link: ThreadResumeLink) -> Result<ThreadResumeLink> {
        let doc: MongoThreadLink = link.clone().into();
        self.links.insert_one(&doc).await?;
        Ok(link)
    }

    async fn list_resume_ids(&self, thread_id: &str) -> Result<Vec<String>> {
        let links: Vec<MongoThreadLink> = self
            .links
            .find(doc! { "thread_id": thread_id })
            .await?
            .try_collect()
            .await?;
        Ok(links.into_iter().map(|l| l.resume_id).collect())
    }
}
