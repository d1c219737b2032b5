//! Storage listing entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single object discovered in a storage listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Whether this entry is a pseudo-directory (common prefix or marker)
    pub is_dir: bool,
}

impl ObjectEntry {
    /// Create a file entry.
    pub fn file(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
            last_modified: None,
            is_dir: false,
        }
    }

    /// Create a directory entry.
    pub fn dir(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: 0,
            last_modified: None,
            is_dir: true,
        }
    }

    /// Set the last-modified timestamp.
    pub fn with_last_modified(mut self, ts: DateTime<Utc>) -> Self {
        self.last_modified = Some(ts);
        self
    }

    /// The final path segment of the key.
    pub fn name(&self) -> &str {
        self.key
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.key)
    }

    /// The lowercase file extension, without the leading dot.
    pub fn extension(&self) -> Option<String> {
        let name = self.name();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
