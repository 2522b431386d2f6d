//! Resources domain - the learning resource catalog
//!
//! The catalog is a list of topic entries loaded once from a JSON document.
//! It is never modified afterwards; the two queries (topic listing and
//! topic search) are pure reads over it.

pub mod actions;
pub mod errors;
pub mod models;

pub use actions::{find_resources, list_topics, SearchResults};
pub use errors::LoadError;
pub use models::{ResourceRecord, ResourceStore, TopicEntry, TopicGroup};
