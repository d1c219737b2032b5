//! The document record produced by ingestion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document metadata: string keys mapped to arbitrary JSON values.
///
/// A BTreeMap keeps serialized output stable, which matters for JSONL
/// consumers that diff ingestion runs.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// A parsed document.
///
/// Documents are constructed by file readers and finalized by the
/// directory loader, which assigns the identifier and attaches file-level
/// metadata. Connectors may rewrite `id` after receipt (e.g. prepending a
/// source prefix); they receive the documents by value, so the rewrite
/// never aliases state held elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier. Assigned by the loader; connectors may prefix it.
    pub id: String,

    /// Extracted text content.
    pub text: String,

    /// Metadata attached during loading (file path, size, user-supplied keys).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with an identifier and text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create a document from text alone, leaving the identifier empty.
    ///
    /// File readers use this form; identifier assignment is the loader's job.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    /// Attach a metadata entry, returning the document.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Merge entries from another metadata map. Existing keys are kept.
    pub fn merge_metadata(&mut self, other: &Metadata) {
        for (key, value) in other {
            self.metadata
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}
