// OpenAI Assistants API client (HTTP direct, no SDK)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Response;

use crate::error::{AssistantError, Result};
use crate::streaming::parse_run_sse_stream;
use crate::traits::{AssistantApi, RunEventStream};
use crate::types::{
    CreateMessageRequest, CreateRunRequest, CreateThreadRequest, DeletedObject, ListMessagesQuery,
    MessageList, MessageObject, RunObject, SubmitToolOutputsRequest, ThreadObject,
};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const ASSISTANTS_VERSION: &str = "assistants=v2";

pub struct OpenAiAssistantClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenAiAssistantClient {
    /// Create a new client with an API key. Every request carries the
    /// bearer credential and the assistants protocol version header.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("OpenAI-Beta", HeaderValue::from_static(ASSISTANTS_VERSION));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| AssistantError::InvalidApiKey)?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: OPENAI_API_BASE.to_string(),
        })
    }

    /// Override the API base URL (test servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn threads_url(&self) -> String {
        format!("{}/threads", self.base_url)
    }

    /// Convert a non-success response into `AssistantError::Api`, keeping
    /// the status code and raw body text.
    async fn check(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(AssistantError::Api { status, body })
    }
}

#[async_trait]
impl AssistantApi for OpenAiAssistantClient {
    async fn create_thread(&self, request: CreateThreadRequest) -> Result<ThreadObject> {
        let response = self
            .http_client
            .post(self.threads_url())
            .json(&request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete_thread(&self, thread_id: &str) -> Result<DeletedObject> {
        let response = self
            .http_client
            .delete(format!("{}/{}", self.threads_url(), thread_id))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_message(
        &self,
        thread_id: &str,
        request: CreateMessageRequest,
    ) -> Result<MessageObject> {
        let response = self
            .http_client
            .post(format!("{}/{}/messages", self.threads_url(), thread_id))
            .json(&request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn list_messages(
        &self,
        thread_id: &str,
        query: ListMessagesQuery,
    ) -> Result<MessageList> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = query.limit {
            if limit > 0 {
                params.push(("limit", limit.to_string()));
            }
        }
        if let Some(order) = query.order {
            params.push(("order", order.as_str().to_string()));
        }
        if let Some(after) = query.after {
            params.push(("after", after));
        }
        if let Some(before) = query.before {
            params.push(("before", before));
        }

        let response = self
            .http_client
            .get(format!("{}/{}/messages", self.threads_url(), thread_id))
            .query(&params)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn create_run(&self, thread_id: &str, request: CreateRunRequest) -> Result<RunObject> {
        let response = self
            .http_client
            .post(format!("{}/{}/runs", self.threads_url(), thread_id))
            .json(&request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<RunObject> {
        let response = self
            .http_client
            .get(format!("{}/{}/runs/{}", self.threads_url(), thread_id, run_id))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        request: SubmitToolOutputsRequest,
    ) -> Result<RunObject> {
        let response = self
            .http_client
            .post(format!(
                "{}/{}/runs/{}/submit_tool_outputs",
                self.threads_url(),
                thread_id,
                run_id
            ))
            .json(&request)
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn stream_run(
        &self,
        thread_id: &str,
        request: CreateRunRequest,
    ) -> Result<RunEventStream> {
        let request = CreateRunRequest {
            stream: true,
            ..request
        };

        let response = self
            .http_client
            .post(format!("{}/{}/runs", self.threads_url(), thread_id))
            .json(&request)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(parse_run_sse_stream(response))
    }
}
