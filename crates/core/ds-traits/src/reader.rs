//! File reader trait.

use ds_error::Result;
use ds_types::Document;

/// Context about the file being parsed, passed alongside its bytes.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// Bucket-relative path of the file
    pub path: String,

    /// Basename of the file
    pub name: String,
}

impl FileContext {
    /// Build a context from a bucket-relative path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self { path, name }
    }
}

/// Converts a file's bytes into documents.
///
/// Readers receive fully fetched bytes; they never touch storage. A file
/// may produce any number of documents (an NDJSON file yields one per
/// record line). Readers leave [`Document::id`] empty - identifier
/// assignment and file-level metadata are the loader's job.
pub trait FileReader: Send + Sync {
    /// Parse file bytes into documents.
    fn parse(&self, data: &[u8], ctx: &FileContext) -> Result<Vec<Document>>;

    /// Human-readable description used for logging.
    fn description(&self) -> String;
}
