//! High-level builder wiring the concrete clients into a session engine

use crate::{ElasticClient, MongoStore, OpenAiAssistantClient, SessionConfig, SessionEngine};
use anyhow::{Context, Result};
use std::sync::Arc;

/// High-level builder for a ready-to-use [`SessionEngine`]
///
/// # Example
///
/// ```rust,no_run
/// use cvchat::prelude::*;
///
/// # #[tokio::main]
/// # async fn main() -> Result<()> {
/// let engine = SessionBuilder::new()
///     .openai_key("sk-...")
///     .assistant_id("asst_...")
///     .elasticsearch("http://localhost:9200")
///     .mongodb("mongodb://localhost:27017", "cvchat")
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct SessionBuilder {
    // Assistant API
    openai_key: Option<String>,
    openai_base_url: Option<String>,
    assistant_id: Option<String>,

    // Search index
    elasticsearch_url: Option<String>,
    elasticsearch_api_key: Option<String>,
    index: String,

    // MongoDB
    mongodb_uri: Option<String>,
    database: Option<String>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            openai_key: None,
            openai_base_url: None,
            assistant_id: None,
            elasticsearch_url: None,
            elasticsearch_api_key: None,
            index: "resumes".to_string(),
            mongodb_uri: None,
            database: None,
        }
    }

    /// Set the OpenAI API key (required)
    pub fn openai_key(mut self, key: impl Into<String>) -> Self {
        self.openai_key = Some(key.into());
        self
    }

    /// Override the assistant API base URL (test servers, proxies)
    pub fn openai_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openai_base_url = Some(base_url.into());
        self
    }

    /// Set the assistant every run is started against (required)
    pub fn assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = Some(assistant_id.into());
        self
    }

    /// Set the Elasticsearch base URL (required)
    pub fn elasticsearch(mut self, url: impl Into<String>) -> Self {
        self.elasticsearch_url = Some(url.into());
        self
    }

    /// Set an Elasticsearch API key (optional)
    pub fn elasticsearch_api_key(mut self, key: impl Into<String>) -> Self {
        self.elasticsearch_api_key = Some(key.into());
        self
    }

    /// Set the index holding resume documents (default: `resumes`)
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Set the MongoDB connection (required)
    pub fn mongodb(mut self, uri: impl Into<String>, database: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self.database = Some(database.into());
        self
    }

    /// Build the session engine
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - OpenAI API key or assistant id is not set
    /// - Elasticsearch URL is not set
    /// - MongoDB URI or database is not set
    /// - MongoDB connection fails
    pub async fn build(self) -> Result<SessionEngine> {
        let openai_key = self
            .openai_key
            .context("OpenAI API key is required. Call .openai_key(key)")?;
        let assistant_id = self
            .assistant_id
            .context("Assistant id is required. Call .assistant_id(id)")?;
        let elasticsearch_url = self
            .elasticsearch_url
            .context("Elasticsearch URL is required. Call .elasticsearch(url)")?;
        let mongodb_uri = self
            .mongodb_uri
            .context("MongoDB URI is required. Call .mongodb(uri, database)")?;
        let database = self.database.context("Database name is required")?;

        let mut assistant =
            OpenAiAssistantClient::new(openai_key).context("Failed to create assistant client")?;
        if let Some(base_url) = self.openai_base_url {
            assistant = assistant.with_base_url(base_url);
        }

        let documents = match self.elasticsearch_api_key {
            Some(key) => ElasticClient::with_api_key(&elasticsearch_url, &key),
            None => ElasticClient::new(&elasticsearch_url),
        }
        .context("Failed to create search client")?;

        let store = MongoStore::connect(&mongodb_uri, &database)
            .await
            .context("Failed to connect to MongoDB")?;

        Ok(SessionEngine::new(
            Arc::new(assistant),
            Arc::new(documents),
            Arc::new(store.threads()),
            Arc::new(store.links()),
            SessionConfig::new(assistant_id, self.index),
        ))
    }
}
