pub mod link;
pub mod thread;

pub use link::ThreadResumeLink;
pub use thread::ThreadRecord;
