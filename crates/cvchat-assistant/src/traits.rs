use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::Result;
use crate::streaming::RunStreamEvent;
use crate::types::{
    CreateMessageRequest, CreateRunRequest, CreateThreadRequest, DeletedObject, ListMessagesQuery,
    MessageList, MessageObject, RunObject, SubmitToolOutputsRequest, ThreadObject,
};

pub type RunEventStream = Pin<Box<dyn Stream<Item = Result<RunStreamEvent>> + Send>>;

/// Seam between the orchestrator and the remote assistant API.
///
/// Implementations own the transport; callers own the lifecycle (which
/// threads to create, when to run them, what to do with the stream).
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Create a thread, optionally seeded with initial messages.
    async fn create_thread(&self, request: CreateThreadRequest) -> Result<ThreadObject>;

    /// Delete a remote thread.
    async fn delete_thread(&self, thread_id: &str) -> Result<DeletedObject>;

    /// Append a message to a thread.
    async fn create_message(
        &self,
        thread_id: &str,
        request: CreateMessageRequest,
    ) -> Result<MessageObject>;

    /// List messages in a thread, cursor-paginated.
    async fn list_messages(
        &self,
        thread_id: &str,
        query: ListMessagesQuery,
    ) -> Result<MessageList>;

    /// Start a run without streaming.
    async fn create_run(&self, thread_id: &str, request: CreateRunRequest) -> Result<RunObject>;

    /// Fetch the current state of a run.
    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<RunObject>;

    /// Submit tool outputs for a run awaiting action.
    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        request: SubmitToolOutputsRequest,
    ) -> Result<RunObject>;

    /// Start a run with streaming and return its event stream.
    async fn stream_run(
        &self,
        thread_id: &str,
        request: CreateRunRequest,
    ) -> Result<RunEventStream>;
}
