//! Resource actions (read-only)

pub mod queries;

pub use queries::{find_resources, list_topics, SearchResults};
