//! The Spaces connector.

use ds_error::Result;
use ds_loader::{DirectoryLoader, LoaderConfig, LoaderInput, MetadataFn, ReaderRegistry};
use ds_traits::fs::clean_path;
use ds_traits::{ObjectFs, ObjectReader};
use ds_types::{Document, ObjectEntry};
use std::ops::Range;
use std::sync::Arc;
use tracing::debug;

use crate::client::create_client;
use crate::config::SpacesConfig;
use crate::fs::SpacesFs;

/// Prefix prepended to every document identifier returned by `load`.
pub const ID_PREFIX: &str = "do_spaces_";

/// Bridges a Spaces bucket to the generic directory loader.
///
/// Holds connection configuration plus the two non-serializable pieces
/// of the loading surface: the extension-to-reader mapping and the
/// optional per-file metadata function. Every operation builds a fresh
/// storage facade, so calls are stateless and independently
/// reproducible given the same configuration and bucket contents.
pub struct SpacesConnector {
    config: SpacesConfig,
    registry: ReaderRegistry,
    file_metadata: Option<MetadataFn>,
}

impl SpacesConnector {
    /// Create a connector with the built-in reader registry.
    pub fn new(config: SpacesConfig) -> Self {
        Self {
            config,
            registry: ReaderRegistry::defaults(),
            file_metadata: None,
        }
    }

    /// Replace the reader registry (the extension-to-parser mapping).
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set a per-file metadata function.
    pub fn with_file_metadata(mut self, file_metadata: MetadataFn) -> Self {
        self.file_metadata = Some(file_metadata);
        self
    }

    /// The connection configuration.
    pub fn config(&self) -> &SpacesConfig {
        &self.config
    }

    /// Build a fresh storage facade for the configured bucket.
    ///
    /// Called by every operation; handles are never cached or pooled.
    pub async fn build_fs(&self) -> Result<SpacesFs> {
        self.config.validate()?;
        let client = create_client(&self.config).await?;
        Ok(SpacesFs::new(client, &self.config.bucket))
    }

    /// Whether `path` exists in the bucket.
    pub async fn exists(&self, path: &str) -> Result<bool> {
        self.build_fs().await?.exists(path).await
    }

    /// Create a directory path under the bucket.
    pub async fn make_dirs(&self, path: &str, exist_ok: bool) -> Result<()> {
        self.build_fs().await?.make_dirs(path, exist_ok).await
    }

    /// Open an object for reading.
    pub async fn open(&self, path: &str) -> Result<ObjectReader> {
        self.build_fs().await?.open(path).await
    }

    /// Open a byte range of an object.
    pub async fn open_range(&self, path: &str, range: Range<u64>) -> Result<ObjectReader> {
        self.build_fs().await?.open_range(path, range).await
    }

    /// List the immediate children of `path`, as basenames.
    ///
    /// Order is whatever the underlying listing returned.
    pub async fn list_dir(&self, path: &str) -> Result<Vec<String>> {
        let entries = self.build_fs().await?.list(path).await?;
        Ok(to_basenames(&entries))
    }

    /// Load documents from the configured target.
    ///
    /// An explicit key loads exactly that file; otherwise the prefix
    /// (empty = bucket root) is enumerated. Every returned document id
    /// is rewritten to `do_spaces_` + the loader-assigned id.
    pub async fn load(&self) -> Result<Vec<Document>> {
        let fs = self.build_fs().await?;
        self.load_with_fs(fs).await
    }

    /// Run the load against an already-built storage facade.
    ///
    /// `load` delegates here; tests drive it with an in-memory facade.
    pub async fn load_with_fs<F: ObjectFs>(&self, fs: F) -> Result<Vec<Document>> {
        debug!(
            bucket = %self.config.bucket,
            key = ?self.config.key,
            prefix = %self.config.prefix,
            "Loading documents from Spaces"
        );

        let mut loader = DirectoryLoader::new(fs, self.loader_config(), self.registry.clone());
        if let Some(file_metadata) = &self.file_metadata {
            loader = loader.with_file_metadata(Arc::clone(file_metadata));
        }

        let mut documents = loader.load().await?;
        for doc in &mut documents {
            doc.id = format!("{ID_PREFIX}{}", doc.id);
        }

        debug!(documents = documents.len(), "Load completed");
        Ok(documents)
    }

    /// Resolve the loader target from the configuration.
    ///
    /// An explicit key always wins over the prefix; an empty prefix
    /// (equivalent to an absent one) means the bucket root.
    fn loader_input(&self) -> LoaderInput {
        match &self.config.key {
            Some(key) => LoaderInput::Files {
                paths: vec![clean_path(key).to_string()],
            },
            None => LoaderInput::Directory {
                root: clean_path(&self.config.prefix).to_string(),
            },
        }
    }

    fn loader_config(&self) -> LoaderConfig {
        let mut config = LoaderConfig {
            input: self.loader_input(),
            ..Default::default()
        }
        .with_recursive(self.config.recursive)
        .with_filename_as_id(self.config.filename_as_id);

        if let Some(exts) = &self.config.required_exts {
            config = config.with_required_exts(exts.iter().cloned());
        }
        if let Some(limit) = self.config.num_files_limit {
            config = config.with_num_files_limit(limit);
        }
        config
    }
}

/// Reduce listing entries to their final path segments.
fn to_basenames(entries: &[ObjectEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name().to_string()).collect()
}
