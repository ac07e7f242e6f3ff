pub mod elastic;
pub mod error;
pub mod traits;
pub mod types;

pub use elastic::ElasticClient;
pub use error::SearchError;
pub use traits::DocumentStore;
pub use types::{AwardEntry, BasicInfo, ProjectEntry, ResumeSummary, WorkEntry};
