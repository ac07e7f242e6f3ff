pub mod client;
pub mod error;
pub mod streaming;
pub mod traits;
pub mod types;

pub use client::OpenAiAssistantClient;
pub use error::AssistantError;
pub use streaming::{parse_run_sse_stream, RunStreamEvent};
pub use traits::{AssistantApi, RunEventStream};
pub use types::{
    CreateMessageRequest, CreateRunRequest, CreateThreadRequest, DeletedObject, ListMessagesQuery,
    MessageList, MessageObject, MessageRole, RunObject, RunStatus, SortOrder,
    SubmitToolOutputsRequest, ThreadObject, ToolOutput,
};
