//! Mock feed client for running without upstream access.
//!
//! Serves a snapshot document from a local JSON file, re-reading it on
//! every fetch so the file can be edited while the server runs.

use std::path::{Path, PathBuf};

use super::error::FeedError;
use super::types::FeedSnapshot;

/// Feed client that reads a snapshot document from disk.
#[derive(Debug, Clone)]
pub struct MockFeedClient {
    path: PathBuf,
}

impl MockFeedClient {
    /// Create a mock client serving the given snapshot file.
    ///
    /// The file is validated eagerly so a bad path fails at startup
    /// rather than on the first reload cycle.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let client = Self {
            path: path.as_ref().to_path_buf(),
        };
        client.fetch_snapshot()?;
        Ok(client)
    }

    /// Read and parse the snapshot file.
    pub fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| FeedError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(serde_json::from_str(&json)?)
    }
}
