pub mod message;
pub mod run;
pub mod thread;

pub use message::{
    CreateMessageRequest, ListMessagesQuery, MessageList, MessageObject, MessageRole, SortOrder,
    TextContent,
};
pub use run::{
    CreateRunRequest, LastError, RequiredAction, RunObject, RunStatus, RunToolCall,
    SubmitToolOutputsRequest, ToolCallFunction, ToolOutput,
};
pub use thread::{CreateThreadRequest, DeletedObject, ThreadObject};
