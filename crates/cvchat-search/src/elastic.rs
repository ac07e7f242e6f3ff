// Elasticsearch-backed document store (HTTP direct, no SDK)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SearchError};
use crate::traits::DocumentStore;
use crate::types::ResumeSummary;

pub struct ElasticClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ElasticClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), None)
    }

    /// Create a client authenticating with an Elasticsearch API key.
    pub fn with_api_key(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        Self::build(base_url.into(), Some(api_key))
    }

    fn build(base_url: String, api_key: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("ApiKey {}", key))
                    .map_err(|_| SearchError::InvalidApiKey)?,
            );
        }

        let http_client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(SearchError::Api { status, body })
    }
}

#[async_trait]
impl DocumentStore for ElasticClient {
    async fn fetch_by_ids(&self, index: &str, ids: &[String]) -> Result<Vec<ResumeSummary>> {
        let response = self
            .http_client
            .post(format!("{}/{}/_mget", self.base_url, index))
            .json(&json!({ "ids": ids }))
            .send()
            .await?;

        let payload: MgetResponse = Self::check(response).await?.json().await?;
        mget_to_summaries(payload)
    }

    async fn fetch_by_id(&self, index: &str, id: &str) -> Result<ResumeSummary> {
        let response = self
            .http_client
            .get(format!("{}/{}/_doc/{}", self.base_url, index, id))
            .send()
            .await?;

        // The index answers 404 for unknown document ids.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(SearchError::DocumentNotFound(id.to_string()));
        }

        let payload: GetDocResponse = Self::check(response).await?.json().await?;
        doc_to_summary(payload)
    }
}

// Wire shapes for `_mget` and `_doc` responses.

#[derive(Debug, Deserialize)]
pub struct MgetResponse {
    pub docs: Vec<GetDocResponse>,
}

#[derive(Debug, Deserialize)]
pub struct GetDocResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source", default)]
    pub source: Option<ResumeSummary>,
}

/// Strict batch decode: the first missing document fails the whole batch.
pub fn mget_to_summaries(payload: MgetResponse) -> Result<Vec<ResumeSummary>> {
    payload.docs.into_iter().map(doc_to_summary).collect()
}

fn doc_to_summary(doc: GetDocResponse) -> Result<ResumeSummary> {
    if !doc.found {
        return Err(SearchError::DocumentNotFound(doc.id));
    }
    doc.source.ok_or(SearchError::DocumentNotFound(doc.id))
}
