//! The directory loader.

use ds_error::{LoaderError, Result};
use ds_traits::fs::clean_path;
use ds_traits::{FileContext, ObjectFs};
use ds_types::{Document, Metadata, ObjectEntry};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::config::{LoaderConfig, LoaderInput};
use crate::registry::ReaderRegistry;
use crate::stats::LoadStats;

/// Produces per-file metadata from a bucket-relative path.
///
/// When supplied, its output replaces the default file metadata (path,
/// name, size, last-modified), matching the override semantics of the
/// construction surface.
pub type MetadataFn = Arc<dyn Fn(&str) -> Metadata + Send + Sync>;

/// Loads documents from files reachable through an [`ObjectFs`].
///
/// Generic over the storage facade so the same traversal and dispatch
/// logic serves any backend, including the in-memory one used in tests.
pub struct DirectoryLoader<F: ObjectFs> {
    fs: F,
    config: LoaderConfig,
    registry: ReaderRegistry,
    file_metadata: Option<MetadataFn>,
}

impl<F: ObjectFs> DirectoryLoader<F> {
    /// Create a loader over a storage facade.
    pub fn new(fs: F, config: LoaderConfig, registry: ReaderRegistry) -> Self {
        Self {
            fs,
            config,
            registry,
            file_metadata: None,
        }
    }

    /// Set a per-file metadata function.
    pub fn with_file_metadata(mut self, file_metadata: MetadataFn) -> Self {
        self.file_metadata = Some(file_metadata);
        self
    }

    /// Run the load.
    ///
    /// Resolves the file set (traversal, extension filter, sort, limit -
    /// or the explicit file list verbatim), parses each file through the
    /// registry, and returns the documents in file order.
    pub async fn load(&self) -> Result<Vec<Document>> {
        let mut stats = LoadStats::new();
        let files = self.resolve_files(&mut stats).await?;

        let mut documents = Vec::new();
        for entry in &files {
            let docs = self.load_file(entry).await?;
            debug!(key = %entry.key, documents = docs.len(), "Loaded file");
            stats.record_loaded(docs.len());
            documents.extend(docs);
        }

        debug!(
            files_listed = stats.files_listed,
            files_filtered = stats.files_filtered,
            files_loaded = stats.files_loaded,
            documents = stats.documents,
            "Load completed"
        );

        Ok(documents)
    }

    /// Resolve the files to load.
    ///
    /// An explicit file list is taken verbatim: no filtering, no limit.
    /// Directory input is walked, filtered by extension, sorted by key
    /// for deterministic order, then truncated to the file limit.
    async fn resolve_files(&self, stats: &mut LoadStats) -> Result<Vec<ObjectEntry>> {
        match &self.config.input {
            LoaderInput::Files { paths } => Ok(paths
                .iter()
                .map(|p| ObjectEntry::file(clean_path(p), 0))
                .collect()),
            LoaderInput::Directory { root } => {
                let root = clean_path(root);
                debug!(
                    root = %root,
                    recursive = self.config.recursive,
                    "Walking directory root"
                );

                let mut entries = self.fs.walk(root, self.config.recursive).await?;
                stats.files_listed = entries.len();

                if let Some(exts) = &self.config.required_exts {
                    entries.retain(|e| e.extension().is_some_and(|x| exts.contains(&x)));
                }

                entries.sort_by(|a, b| a.key.cmp(&b.key));
                if let Some(limit) = self.config.num_files_limit {
                    entries.truncate(limit);
                }

                stats.files_filtered = stats.files_listed - entries.len();
                Ok(entries)
            }
        }
    }

    /// Parse one file into documents with metadata and identifiers.
    async fn load_file(&self, entry: &ObjectEntry) -> Result<Vec<Document>> {
        let ctx = FileContext::new(entry.key.clone());

        let ext = entry
            .extension()
            .ok_or_else(|| LoaderError::MissingExtension(entry.key.clone()))?;
        let reader = self.registry.get(&ext).ok_or_else(|| {
            LoaderError::UnsupportedFormat(format!("no reader for .{ext} ({})", entry.key))
        })?;

        let data = self.fs.read(&entry.key).await?;
        let mut documents = reader.parse(&data, &ctx)?;

        let file_metadata = match &self.file_metadata {
            Some(f) => f(&entry.key),
            None => default_file_metadata(entry, &ctx, data.len()),
        };

        let multi = documents.len() > 1;
        for (idx, doc) in documents.iter_mut().enumerate() {
            doc.merge_metadata(&file_metadata);
            doc.id = if self.config.filename_as_id {
                if multi {
                    format!("{}_part_{}", entry.key, idx)
                } else {
                    entry.key.clone()
                }
            } else {
                Uuid::new_v4().to_string()
            };
        }

        Ok(documents)
    }
}

/// Default per-file metadata: path, name, size, last-modified.
fn default_file_metadata(entry: &ObjectEntry, ctx: &FileContext, size: usize) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("file_path".to_string(), serde_json::json!(entry.key));
    metadata.insert("file_name".to_string(), serde_json::json!(ctx.name));
    metadata.insert("file_size".to_string(), serde_json::json!(size));
    if let Some(ts) = entry.last_modified {
        metadata.insert(
            "last_modified".to_string(),
            serde_json::json!(ts.to_rfc3339()),
        );
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_traits::MemoryFs;

    fn seeded_fs() -> MemoryFs {
        let fs = MemoryFs::new();
        fs.insert("reports/a.txt", "alpha");
        fs.insert("reports/b.md", "# beta");
        fs.insert("reports/2024/c.txt", "gamma");
        fs.insert("reports/image.bin", &b"\x00\x01"[..]);
        fs
    }

    fn loader(fs: MemoryFs, config: LoaderConfig) -> DirectoryLoader<MemoryFs> {
        DirectoryLoader::new(fs, config, ReaderRegistry::defaults())
    }

    #[tokio::test]
    async fn test_load_directory_recursive() {
        let config = LoaderConfig::directory("reports").with_required_exts(["txt", "md"]);
        let docs = loader(seeded_fs(), config).load().await.unwrap();

        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["reports/2024/c.txt", "reports/a.txt", "reports/b.md"]
        );
        assert_eq!(docs[1].text, "alpha");
    }

    #[tokio::test]
    async fn test_load_non_recursive() {
        let config = LoaderConfig::directory("reports")
            .with_required_exts(["txt"])
            .with_recursive(false);
        let docs = loader(seeded_fs(), config).load().await.unwrap();

        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["reports/a.txt"]);
    }

    #[tokio::test]
    async fn test_num_files_limit_after_sort() {
        let config = LoaderConfig::directory("reports")
            .with_required_exts(["txt", "md"])
            .with_num_files_limit(2);
        let docs = loader(seeded_fs(), config).load().await.unwrap();

        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["reports/2024/c.txt", "reports/a.txt"]);
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_an_error() {
        let config = LoaderConfig::directory("reports");
        let err = loader(seeded_fs(), config).load().await.unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }

    #[tokio::test]
    async fn test_explicit_files_bypass_filters() {
        let fs = seeded_fs();
        let config = LoaderConfig::files(["reports/a.txt"])
            .with_required_exts(["md"])
            .with_num_files_limit(0);
        let docs = loader(fs, config).load().await.unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "reports/a.txt");
    }

    #[tokio::test]
    async fn test_missing_explicit_file_propagates_not_found() {
        let config = LoaderConfig::files(["reports/missing.txt"]);
        let err = loader(seeded_fs(), config).load().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_directory_yields_no_documents() {
        let config = LoaderConfig::directory("nothing-here");
        let docs = loader(seeded_fs(), config).load().await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn test_default_metadata_attached() {
        let config = LoaderConfig::files(["reports/a.txt"]);
        let docs = loader(seeded_fs(), config).load().await.unwrap();

        let meta = &docs[0].metadata;
        assert_eq!(meta.get("file_path"), Some(&serde_json::json!("reports/a.txt")));
        assert_eq!(meta.get("file_name"), Some(&serde_json::json!("a.txt")));
        assert_eq!(meta.get("file_size"), Some(&serde_json::json!(5)));
    }

    #[tokio::test]
    async fn test_user_metadata_fn_replaces_defaults() {
        let config = LoaderConfig::files(["reports/a.txt"]);
        let metadata_fn: MetadataFn = Arc::new(|path: &str| {
            let mut m = Metadata::new();
            m.insert("source_path".to_string(), serde_json::json!(path));
            m
        });
        let docs = loader(seeded_fs(), config)
            .with_file_metadata(metadata_fn)
            .load()
            .await
            .unwrap();

        let meta = &docs[0].metadata;
        assert_eq!(
            meta.get("source_path"),
            Some(&serde_json::json!("reports/a.txt"))
        );
        assert!(meta.get("file_path").is_none());
    }

    #[tokio::test]
    async fn test_multi_document_file_gets_part_suffixes() {
        let fs = MemoryFs::new();
        fs.insert("logs/events.ndjson", "{\"a\":1}\n{\"a\":2}\n");

        let config = LoaderConfig::directory("logs");
        let docs = loader(fs, config).load().await.unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "logs/events.ndjson_part_0");
        assert_eq!(docs[1].id, "logs/events.ndjson_part_1");
    }

    #[tokio::test]
    async fn test_uuid_ids_when_filename_as_id_disabled() {
        let config = LoaderConfig::files(["reports/a.txt"]).with_filename_as_id(false);
        let docs = loader(seeded_fs(), config).load().await.unwrap();

        assert_eq!(docs.len(), 1);
        assert!(Uuid::parse_str(&docs[0].id).is_ok());
    }
}
