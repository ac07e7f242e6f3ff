pub mod error;
pub mod models;
pub mod traits;

#[cfg(feature = "mongodb")]
pub mod mongo;

pub use error::PersistError;
pub use models::{ThreadRecord, ThreadResumeLink};
pub use traits::{ThreadLinkRepository, ThreadRepository};

#[cfg(feature = "mongodb")]
pub use mongo::{MongoStore, MongoThreadLinkRepository, MongoThreadRepository};
