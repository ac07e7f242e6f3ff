pub mod config;
pub mod engine;
pub mod error;
pub mod policy;
pub mod seed;

pub use config::SessionConfig;
pub use engine::{FragmentStream, SessionEngine};
pub use error::{SessionError, UpstreamError};
pub use policy::{resolve_documents, ResolutionPolicy};
pub use seed::build_seed;
