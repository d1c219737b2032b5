//! Storage facade trait.

use async_trait::async_trait;
use bytes::Bytes;
use ds_error::Result;
use ds_types::ObjectEntry;
use std::io::Cursor;
use std::ops::Range;
use std::pin::Pin;
use tokio::io::AsyncRead;

/// A byte-stream handle over an object, positioned at the start.
pub type ObjectReader = Pin<Box<dyn AsyncRead + Send>>;

/// Facade over an object store that a directory loader can traverse.
///
/// Paths are bucket-relative keys using `/` separators and no leading
/// slash. Pseudo-directories are keys ending in `/` (zero-byte markers)
/// or common prefixes of real objects; implementations must treat both
/// as directories.
///
/// Implementations are constructed fresh per operation by their owning
/// connector and hold no mutable state, so a handle's lifetime is the
/// duration of a single call chain.
#[async_trait]
pub trait ObjectFs: Send + Sync {
    /// Whether `path` names an object or a non-empty pseudo-directory.
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Create directory markers for `path` and every missing ancestor.
    ///
    /// Fails with [`ds_error::StorageError::AlreadyExists`] when the path
    /// exists and `exist_ok` is false.
    async fn make_dirs(&self, path: &str, exist_ok: bool) -> Result<()>;

    /// Fetch the full content of an object.
    async fn read(&self, path: &str) -> Result<Bytes>;

    /// Write the full content of an object.
    async fn put(&self, path: &str, data: Bytes) -> Result<()>;

    /// List the immediate children of `path`.
    ///
    /// Directories precede files; order within each group is the
    /// backend's listing order. Entries carry full keys, not basenames.
    async fn list(&self, path: &str) -> Result<Vec<ObjectEntry>>;

    /// Enumerate file objects under `prefix`.
    ///
    /// With `recursive` set, descends into every sub-prefix; otherwise
    /// only the immediate level is returned. Directory markers are
    /// filtered out.
    async fn walk(&self, prefix: &str, recursive: bool) -> Result<Vec<ObjectEntry>>;

    /// Open an object for reading, returning a stream handle at offset 0.
    async fn open(&self, path: &str) -> Result<ObjectReader> {
        let data = self.read(path).await?;
        Ok(Box::pin(Cursor::new(data)))
    }

    /// Open a byte range of an object.
    ///
    /// The default implementation fetches the whole object and slices;
    /// backends with ranged reads should override it.
    async fn open_range(&self, path: &str, range: Range<u64>) -> Result<ObjectReader> {
        let data = self.read(path).await?;
        let len = data.len() as u64;
        let start = range.start.min(len) as usize;
        let end = range.end.min(len) as usize;
        Ok(Box::pin(Cursor::new(data.slice(start..end))))
    }
}

/// Strip leading and trailing `/` from a bucket-relative path.
pub fn clean_path(path: &str) -> &str {
    path.trim_matches('/')
}
