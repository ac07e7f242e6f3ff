use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use tracing::{debug, error};

use cvchat_assistant::{
    AssistantApi, CreateMessageRequest, CreateRunRequest, CreateThreadRequest, ListMessagesQuery,
    MessageList, RunStreamEvent,
};
use cvchat_persist::{ThreadLinkRepository, ThreadRecord, ThreadRepository, ThreadResumeLink};
use cvchat_search::{DocumentStore, ResumeSummary};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError, UpstreamError};
use crate::policy::{resolve_documents, ResolutionPolicy};
use crate::seed;

/// Lazy, finite, non-restartable sequence of response text fragments.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Chat session orchestrator.
///
/// Composes the assistant API, the document store and the local
/// repositories into the session lifecycle. All collaborators are
/// injected at construction; the engine holds no other state.
pub struct SessionEngine {
    assistant: Arc<dyn AssistantApi>,
    documents: Arc<dyn DocumentStore>,
    threads: Arc<dyn ThreadRepository>,
    links: Arc<dyn ThreadLinkRepository>,
    config: SessionConfig,
}

impl SessionEngine {
    pub fn new(
        assistant: Arc<dyn AssistantApi>,
        documents: Arc<dyn DocumentStore>,
        threads: Arc<dyn ThreadRepository>,
        links: Arc<dyn ThreadLinkRepository>,
        config: SessionConfig,
    ) -> Self {
        Self {
            assistant,
            documents,
            threads,
            links,
            config,
        }
    }

    /// Start a session: resolve the documents, create a remote thread
    /// seeded with their context, and record the thread plus one link row
    /// per document locally.
    ///
    /// The returned record's id is the one assigned by the assistant
    /// service. A persistence failure after the remote thread exists is
    /// surfaced as an error and the remote thread is left orphaned; no
    /// compensating delete is attempted.
    pub async fn start_session(
        &self,
        resume_ids: &[String],
        thread_name: &str,
    ) -> Result<ThreadRecord> {
        let ids: Vec<String> = resume_ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect();

        if ids.is_empty() {
            return Err(SessionError::InvalidArgument(
                "at least one non-blank resume id is required".to_string(),
            ));
        }

        let documents =
            resolve_documents(self.documents.as_ref(), &self.config.index, &ids, ResolutionPolicy::Strict)
                .await?;

        let seed_message = CreateMessageRequest::user(seed::build_seed(&documents));
        let thread = self
            .assistant
            .create_thread(CreateThreadRequest::with_message(seed_message))
            .await?;

        let record = self
            .threads
            .create(ThreadRecord::new(&thread.id, thread_name))
            .await
            .map_err(|e| {
                error!(
                    "failed to record thread {}; external thread left orphaned: {}",
                    thread.id, e
                );
                SessionError::from(e)
            })?;

        for id in &ids {
            self.links
                .create(ThreadResumeLink::new(&thread.id, id))
                .await
                .map_err(|e| {
                    error!(
                        "failed to link resume {} to thread {}: {}",
                        id, thread.id, e
                    );
                    SessionError::from(e)
                })?;
        }

        Ok(record)
    }

    /// Append a user message to the thread, run the configured assistant
    /// against it, and expose the response as a stream of text fragments.
    ///
    /// Fragments arrive in the exact order the run produced them; a
    /// mid-stream failure is surfaced as the next item and ends the
    /// stream, already-delivered fragments are not retracted. Tool-call
    /// and status events are consumed internally and never yielded.
    pub async fn send_message(&self, thread_id: &str, content: &str) -> Result<FragmentStream> {
        if thread_id.trim().is_empty() {
            return Err(SessionError::InvalidArgument(
                "thread id must not be blank".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(SessionError::InvalidArgument(
                "message content must not be blank".to_string(),
            ));
        }

        self.assistant
            .create_message(thread_id, CreateMessageRequest::user(content))
            .await?;

        let mut events = self
            .assistant
            .stream_run(thread_id, CreateRunRequest::streamed(&self.config.assistant_id))
            .await?;

        Ok(Box::pin(async_stream::stream! {
            while let Some(event) = events.next().await {
                match event {
                    Ok(RunStreamEvent::TextDelta { content }) => yield Ok(content),
                    Ok(RunStreamEvent::RunUpdate { event, status }) => {
                        debug!("run update: {} ({:?})", event, status);
                    }
                    Ok(RunStreamEvent::RequiresAction { run_id, .. }) => {
                        debug!("run {} awaiting tool outputs; not handled in this flow", run_id);
                    }
                    Ok(RunStreamEvent::Failed { reason }) => {
                        yield Err(SessionError::Upstream(UpstreamError::RunFailed(reason)));
                        return;
                    }
                    Ok(RunStreamEvent::Done) => break,
                    Err(e) => {
                        yield Err(e.into());
                        return;
                    }
                }
            }
        }))
    }

    /// Pass-through pagination query against the remote thread history.
    /// A zero limit is treated as unset and defers to the remote default.
    pub async fn list_messages(
        &self,
        thread_id: &str,
        mut query: ListMessagesQuery,
    ) -> Result<MessageList> {
        if query.limit == Some(0) {
            query.limit = None;
        }
        Ok(self.assistant.list_messages(thread_id, query).await?)
    }

    /// Local bookkeeping only; may lag the remote service if a past
    /// `start_session` failed between remote and local creation.
    pub async fn list_threads(&self) -> Result<Vec<ThreadRecord>> {
        Ok(self.threads.list_all().await?)
    }

    /// Documents linked to a thread, resolved leniently: a failing
    /// document fetch is skipped, not fatal, so one bad id cannot hide
    /// the rest of the thread's context.
    pub async fn documents_for_thread(&self, thread_id: &str) -> Result<Vec<ResumeSummary>> {
        let ids = self.links.list_resume_ids(thread_id).await?;
        let documents = resolve_documents(
            self.documents.as_ref(),
            &self.config.index,
            &ids,
            ResolutionPolicy::Lenient,
        )
        .await?;
        Ok(documents)
    }

    /// Rename the thread locally and return the updated record. Names
    /// are a local-only concept; the remote service is not involved.
    pub async fn rename_thread(&self, thread_id: &str, new_name: &str) -> Result<ThreadRecord> {
        if new_name.trim().is_empty() {
            return Err(SessionError::InvalidArgument(
                "thread name must not be blank".to_string(),
            ));
        }

        self.threads.update_name(thread_id, new_name).await?;

        let updated = self
            .threads
            .find_by_id(thread_id)
            .await?
            .ok_or_else(|| SessionError::NotFound(thread_id.to_string()))?;
        Ok(updated)
    }

    /// Delete the local thread record (link rows cascade with it). The
    /// remote thread is not deleted; remote and local deletion are
    /// independent operations.
    pub async fn delete_thread(&self, thread_id: &str) -> Result<()> {
        self.threads.delete(thread_id).await?;
        Ok(())
    }
}
