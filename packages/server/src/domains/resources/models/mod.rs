//! Resource domain models

pub mod resource;
pub mod store;

pub use resource::{topic_key, ResourceRecord, TopicEntry, TopicGroup};
pub use store::ResourceStore;
