//! ResourceStore - the immutable in-memory catalog
//!
//! Built once at startup from the dataset document and shared read-only with
//! every request handler. There are no mutating methods.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::domains::resources::errors::LoadError;
use crate::domains::resources::models::TopicEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStore {
    entries: Vec<TopicEntry>,
}

impl ResourceStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    /// Load the store from a JSON document containing `[TopicEntry...]`.
    ///
    /// A missing file yields an empty store (logged as a warning). Anything
    /// else that goes wrong is an error; nothing is partially loaded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "Resource dataset not found, starting with an empty catalog"
                );
                return Ok(Self::empty());
            }
            Err(source) => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let store = Self::from_json(&raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            topics = store.len(),
            resources = store.resource_count(),
            path = %path.display(),
            "Loaded resource dataset"
        );

        Ok(store)
    }

    /// Decode a dataset document held in memory
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<TopicEntry> = serde_json::from_str(raw)?;
        Ok(Self::from_entries(entries))
    }

    /// Entries in document order
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Number of topic entries (not distinct topics)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of resource records across all entries
    pub fn resource_count(&self) -> usize {
        self.entries.iter().map(|e| e.resources.len()).sum()
    }
}
