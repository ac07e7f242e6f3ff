pub mod client;
pub mod models;
pub mod repositories;

pub use client::MongoStore;
pub use repositories::{MongoThreadLinkRepository, MongoThreadRepository};
