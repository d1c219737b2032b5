//! In-memory storage facade (for testing/development).

use async_trait::async_trait;
use bytes::Bytes;
use ds_error::{Result, StorageError};
use ds_types::ObjectEntry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use crate::fs::{clean_path, ObjectFs};

/// An [`ObjectFs`] backed by an in-memory map.
///
/// Mirrors the pseudo-directory semantics of S3-style stores: directories
/// are either zero-byte keys ending in `/` or common prefixes of stored
/// objects. Listing order is lexicographic.
#[derive(Debug, Default)]
pub struct MemoryFs {
    objects: RwLock<BTreeMap<String, Bytes>>,
}

impl MemoryFs {
    /// Create an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object, creating it if absent and replacing it otherwise.
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Bytes>) {
        self.objects
            .write()
            .unwrap()
            .insert(path.into(), data.into());
    }

    /// All stored keys, in lexicographic order.
    pub fn keys(&self) -> Vec<String> {
        self.objects.read().unwrap().keys().cloned().collect()
    }

    fn contains(&self, path: &str) -> bool {
        let path = clean_path(path);
        if path.is_empty() {
            return true;
        }
        let objects = self.objects.read().unwrap();
        if objects.contains_key(path) || objects.contains_key(&format!("{path}/")) {
            return true;
        }
        let dir_prefix = format!("{path}/");
        objects.keys().any(|k| k.starts_with(&dir_prefix))
    }
}

#[async_trait]
impl ObjectFs for MemoryFs {
    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.contains(path))
    }

    async fn make_dirs(&self, path: &str, exist_ok: bool) -> Result<()> {
        let path = clean_path(path);
        if path.is_empty() {
            return Ok(());
        }
        if self.contains(path) && !exist_ok {
            return Err(StorageError::AlreadyExists(path.to_string()).into());
        }

        let mut objects = self.objects.write().unwrap();
        let mut marker = String::new();
        for segment in path.split('/') {
            marker.push_str(segment);
            marker.push('/');
            objects.entry(marker.clone()).or_insert_with(Bytes::new);
        }
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Bytes> {
        let path = clean_path(path);
        self.objects
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()).into())
    }

    async fn put(&self, path: &str, data: Bytes) -> Result<()> {
        self.insert(clean_path(path).to_string(), data);
        Ok(())
    }

    async fn list(&self, path: &str) -> Result<Vec<ObjectEntry>> {
        let path = clean_path(path);
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };

        let objects = self.objects.read().unwrap();
        let mut dirs = BTreeSet::new();
        let mut files = Vec::new();

        for (key, data) in objects.range(prefix.clone()..) {
            if !key.starts_with(&prefix) {
                break;
            }
            let rest = &key[prefix.len()..];
            if rest.is_empty() {
                continue; // the marker for `path` itself
            }
            match rest.split_once('/') {
                Some((child, _)) => {
                    dirs.insert(format!("{prefix}{child}/"));
                }
                None => files.push(ObjectEntry::file(key.clone(), data.len() as u64)),
            }
        }

        let mut entries: Vec<ObjectEntry> = dirs.into_iter().map(ObjectEntry::dir).collect();
        entries.extend(files);
        Ok(entries)
    }

    async fn walk(&self, prefix: &str, recursive: bool) -> Result<Vec<ObjectEntry>> {
        let prefix = clean_path(prefix);
        let prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("{prefix}/")
        };

        let objects = self.objects.read().unwrap();
        let mut entries = Vec::new();

        for (key, data) in objects.range(prefix.clone()..) {
            if !key.starts_with(&prefix) {
                break;
            }
            if key.ends_with('/') {
                continue; // directory marker
            }
            let rest = &key[prefix.len()..];
            if !recursive && rest.contains('/') {
                continue;
            }
            entries.push(ObjectEntry::file(key.clone(), data.len() as u64));
        }

        Ok(entries)
    }
}
