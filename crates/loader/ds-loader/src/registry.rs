//! Extension-to-reader dispatch.

use ds_traits::FileReader;
use std::collections::HashMap;
use std::sync::Arc;

use crate::readers::{CsvReader, NdjsonReader, TextReader};

/// Maps file extensions to the reader that parses them.
///
/// A registry starts from the built-in text-shaped readers and lets
/// callers layer their own mappings on top; a user-registered reader for
/// an extension replaces the built-in one. Lookup is by lowercase
/// extension without the leading dot.
#[derive(Clone)]
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn FileReader>>,
}

impl ReaderRegistry {
    /// An empty registry with no readers at all.
    pub fn empty() -> Self {
        Self {
            readers: HashMap::new(),
        }
    }

    /// The built-in registry: plain text, CSV/TSV, and NDJSON readers.
    pub fn defaults() -> Self {
        let text: Arc<dyn FileReader> = Arc::new(TextReader);
        let csv: Arc<dyn FileReader> = Arc::new(CsvReader::comma());
        let tsv: Arc<dyn FileReader> = Arc::new(CsvReader::tab());
        let ndjson: Arc<dyn FileReader> = Arc::new(NdjsonReader);

        let mut registry = Self::empty();
        for ext in ["txt", "text", "md", "markdown", "log", "html", "htm"] {
            registry.readers.insert(ext.to_string(), Arc::clone(&text));
        }
        registry.readers.insert("csv".to_string(), csv);
        registry.readers.insert("tsv".to_string(), tsv);
        for ext in ["json", "jsonl", "ndjson"] {
            registry
                .readers
                .insert(ext.to_string(), Arc::clone(&ndjson));
        }
        registry
    }

    /// Register a reader for an extension, replacing any existing mapping.
    pub fn with_reader(mut self, ext: impl Into<String>, reader: Arc<dyn FileReader>) -> Self {
        let ext = ext.into().trim_start_matches('.').to_ascii_lowercase();
        self.readers.insert(ext, reader);
        self
    }

    /// Look up the reader for an extension.
    pub fn get(&self, ext: &str) -> Option<&Arc<dyn FileReader>> {
        self.readers.get(&ext.to_ascii_lowercase())
    }

    /// Registered extensions, unordered.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.readers.keys().map(String::as_str)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}

impl std::fmt::Debug for ReaderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut exts: Vec<&str> = self.extensions().collect();
        exts.sort_unstable();
        f.debug_struct("ReaderRegistry")
            .field("extensions", &exts)
            .finish()
    }
}
