//! Resource query actions
//!
//! Both queries are pure reads over the store. Topic names are compared
//! case-insensitively; when several entries spell a topic differently, the
//! spelling of the first entry in document order is the one reported.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::domains::resources::models::{
    topic_key, ResourceRecord, ResourceStore, TopicGroup,
};

/// Result of `find_resources`: grouped when no topic was given, flat otherwise.
///
/// Serializes untagged, so the JSON is either `[{topic, resources}]` or
/// `[ResourceRecord]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Grouped(Vec<TopicGroup>),
    Filtered(Vec<ResourceRecord>),
}

impl SearchResults {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Grouped(groups) => groups.len(),
            SearchResults::Filtered(resources) => resources.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Distinct topic names, sorted ascending (ordinal string order)
pub fn list_topics(store: &ResourceStore) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut topics: Vec<String> = store
        .entries()
        .iter()
        .filter(|entry| seen.insert(topic_key(&entry.topic)))
        .map(|entry| entry.topic.clone())
        .collect();

    topics.sort();
    topics
}

/// Find resources for a topic, or every topic grouped when `topic` is absent
/// or empty. An unknown topic yields an empty list.
pub fn find_resources(store: &ResourceStore, topic: Option<&str>) -> SearchResults {
    match topic.filter(|t| !t.is_empty()) {
        Some(topic) => {
            let results = SearchResults::Filtered(resources_for_topic(store, topic));
            debug!(topic, count = results.len(), "Filtered resources by topic");
            results
        }
        None => {
            let results = SearchResults::Grouped(
                list_topics(store)
                    .into_iter()
                    .map(|topic| TopicGroup {
                        resources: resources_for_topic(store, &topic),
                        topic,
                    })
                    .collect(),
            );
            debug!(groups = results.len(), "Grouped all resources by topic");
            results
        }
    }
}

/// Concatenate, in store order, the resources of every matching entry
fn resources_for_topic(store: &ResourceStore, topic: &str) -> Vec<ResourceRecord> {
    store
        .entries()
        .iter()
        .filter(|entry| entry.matches_topic(topic))
        .flat_map(|entry| entry.resources.iter().cloned())
        .collect()
}
