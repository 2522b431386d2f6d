use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading the resource dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read resource dataset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Not valid JSON, or not an array of `{ topic, resources }` objects
    #[error("Invalid resource dataset '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}
