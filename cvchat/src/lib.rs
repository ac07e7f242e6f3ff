//! # CVChat - Chat Sessions over Resume Documents
//!
//! CVChat orchestrates conversational sessions grounded in a set of resume
//! documents:
//! - 🚀 **Real-time streaming** (token-by-token responses via SSE)
//! - 🔎 **Search-backed context** (resume summaries pulled from Elasticsearch)
//! - 💾 **Local bookkeeping** (MongoDB thread records and resume links)
//! - ⚡ **Async/await** (built on Tokio for scalability)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cvchat::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = SessionBuilder::new()
//!         .openai_key(std::env::var("OPENAI_API_KEY")?)
//!         .assistant_id("asst_...")
//!         .elasticsearch("http://localhost:9200")
//!         .mongodb("mongodb://localhost:27017", "cvchat")
//!         .build()
//!         .await?;
//!
//!     // Start a session over two resumes
//!     let thread = engine
//!         .start_session(&["resume-1".into(), "resume-2".into()], "backend hires")
//!         .await?;
//!
//!     // Ask a question and stream the answer
//!     let mut fragments = engine
//!         .send_message(&thread.id, "Who fits a senior backend role?")
//!         .await?;
//!     while let Some(fragment) = fragments.next().await {
//!         print!("{}", fragment?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! CVChat consists of several composable crates:
//!
//! - **cvchat-assistant**: OpenAI Assistants API client (threads, messages, runs, SSE streaming)
//! - **cvchat-search**: Elasticsearch-backed resume document store
//! - **cvchat-persist**: MongoDB persistence for thread records and resume links
//! - **cvchat-session**: The session engine tying the three together

// Re-export all public APIs
pub use cvchat_assistant as assistant;
pub use cvchat_persist as persist;
pub use cvchat_search as search;
pub use cvchat_session as session;

// Re-export commonly used types
pub use cvchat_assistant::{
    AssistantApi, ListMessagesQuery, MessageList, OpenAiAssistantClient, SortOrder,
};
pub use cvchat_persist::{MongoStore, ThreadRecord, ThreadResumeLink};
pub use cvchat_search::{DocumentStore, ElasticClient, ResumeSummary};
pub use cvchat_session::{FragmentStream, SessionConfig, SessionEngine, SessionError};

/// High-level builder wiring the concrete clients into a session engine
pub mod builder;

/// Convenient prelude with commonly used types
pub mod prelude {
    pub use crate::builder::SessionBuilder;
    pub use crate::{ListMessagesQuery, ResumeSummary, SessionEngine, SessionError, ThreadRecord};
    pub use anyhow::Result;
}
