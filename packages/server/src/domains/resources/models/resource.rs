//! Resource records and the topic entries that group them
//!
//! These mirror the shape of the dataset document one-to-one. `title` and `url`
//! are required; everything else is optional and omitted from JSON output when
//! absent.

use serde::{Deserialize, Serialize};

/// A single learning resource (article, video, course, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kind of resource, e.g. "video" or "article"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ResourceRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            kind: None,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// One topic and its resources, as it appears in the dataset document.
///
/// Several entries may share a topic name; queries merge them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: String,
    pub resources: Vec<ResourceRecord>,
}

impl TopicEntry {
    pub fn new(topic: impl Into<String>, resources: Vec<ResourceRecord>) -> Self {
        Self {
            topic: topic.into(),
            resources,
        }
    }

    /// Case-insensitive topic comparison
    pub fn matches_topic(&self, topic: &str) -> bool {
        topic_key(&self.topic) == topic_key(topic)
    }
}

/// All resources for one topic, merged across entries (grouped search output)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub topic: String,
    pub resources: Vec<ResourceRecord>,
}

/// Normalized form used for every topic equality check
pub fn topic_key(topic: &str) -> String {
    topic.to_lowercase()
}
