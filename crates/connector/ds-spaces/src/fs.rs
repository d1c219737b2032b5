//! Bucket-bound storage facade over the S3 client.

use async_stream::try_stream;
use async_trait::async_trait;
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{CommonPrefix, Object};
use aws_sdk_s3::Client;
use bytes::Bytes;
use chrono::DateTime;
use ds_error::{DsError, Result, StorageError};
use ds_traits::fs::{clean_path, ObjectFs, ObjectReader};
use ds_types::ObjectEntry;
use futures::{pin_mut, Stream, StreamExt};
use std::io::Cursor;
use std::ops::Range;
use tracing::debug;

/// An [`ObjectFs`] over one Spaces bucket.
///
/// Holds a client and the bucket name; all paths are bucket-relative.
/// Instances are built fresh per connector operation and hold no caches.
pub struct SpacesFs {
    client: Client,
    bucket: String,
}

impl SpacesFs {
    /// Bind a client to a bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// The bucket this facade is bound to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectFs for SpacesFs {
    async fn exists(&self, path: &str) -> Result<bool> {
        let path = clean_path(path);
        if path.is_empty() {
            return Ok(true);
        }

        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
        {
            Ok(_) => return Ok(true),
            Err(e) => {
                let service = e.into_service_error();
                if !service.is_not_found() {
                    return Err(storage_error("head", path, service).into());
                }
            }
        }

        // Not an object; the path may still be a pseudo-directory.
        let resp = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(dir_prefix(path))
            .max_keys(1)
            .send()
            .await
            .map_err(|e| storage_error("list", path, e))?;

        Ok(resp.key_count.unwrap_or(0) > 0)
    }

    async fn make_dirs(&self, path: &str, exist_ok: bool) -> Result<()> {
        let path = clean_path(path);
        if path.is_empty() {
            return Ok(());
        }

        if self.exists(path).await? {
            if exist_ok {
                return Ok(());
            }
            return Err(StorageError::AlreadyExists(path.to_string()).into());
        }

        let mut marker = String::new();
        for segment in path.split('/') {
            marker.push_str(segment);
            marker.push('/');
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(&marker)
                .body(ByteStream::from_static(b""))
                .send()
                .await
                .map_err(|e| storage_error("put", &marker, e))?;
        }

        debug!(bucket = %self.bucket, path = %path, "Created directory markers");
        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Bytes> {
        let path = clean_path(path);
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| storage_error("get", path, e))?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Io(format!("Failed to read body of {path}: {e}")))?;

        Ok(data.into_bytes())
    }

    async fn put(&self, path: &str, data: Bytes) -> Result<()> {
        let path = clean_path(path);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| storage_error("put", path, e))?;
        Ok(())
    }

    async fn list(&self, path: &str) -> Result<Vec<ObjectEntry>> {
        let path = clean_path(path);
        let prefix = dir_prefix(path);

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .delimiter("/");

            if !prefix.is_empty() {
                req = req.prefix(&prefix);
            }
            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| storage_error("list", path, e))?;

            for cp in resp.common_prefixes.unwrap_or_default() {
                if let Some(entry) = entry_from_prefix(cp) {
                    dirs.push(entry);
                }
            }
            for obj in resp.contents.unwrap_or_default() {
                if let Some(entry) = entry_from_object(obj) {
                    files.push(entry);
                }
            }

            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }

        let mut entries = dirs;
        entries.extend(files);
        Ok(entries)
    }

    async fn walk(&self, prefix: &str, recursive: bool) -> Result<Vec<ObjectEntry>> {
        let root = clean_path(prefix);

        if !recursive {
            let entries = self.list(root).await?;
            return Ok(entries.into_iter().filter(|e| !e.is_dir).collect());
        }

        let pfx = dir_prefix(root);
        let stream = list_objects(
            &self.client,
            &self.bucket,
            if pfx.is_empty() { None } else { Some(&pfx) },
        );
        pin_mut!(stream);

        let mut entries = Vec::new();
        while let Some(entry) = stream.next().await {
            entries.push(entry?);
        }
        Ok(entries)
    }

    async fn open(&self, path: &str) -> Result<ObjectReader> {
        let data = self.read(path).await?;
        Ok(Box::pin(Cursor::new(data)))
    }

    async fn open_range(&self, path: &str, range: Range<u64>) -> Result<ObjectReader> {
        let path = clean_path(path);
        if range.start >= range.end {
            return Ok(Box::pin(Cursor::new(Bytes::new())));
        }

        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .range(format!("bytes={}-{}", range.start, range.end - 1))
            .send()
            .await
            .map_err(|e| storage_error("get", path, e))?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Io(format!("Failed to read body of {path}: {e}")))?;

        Ok(Box::pin(Cursor::new(data.into_bytes())))
    }
}

/// List objects under a prefix, handling pagination automatically.
///
/// Directory markers (keys ending with `/`) are filtered out.
fn list_objects<'a>(
    client: &'a Client,
    bucket: &'a str,
    prefix: Option<&str>,
) -> impl Stream<Item = Result<ObjectEntry>> + 'a {
    let prefix = prefix.map(str::to_string);

    try_stream! {
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = client.list_objects_v2().bucket(bucket);

            if let Some(ref prefix) = prefix {
                req = req.prefix(prefix);
            }
            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req
                .send()
                .await
                .map_err(|e| DsError::Storage(storage_error("list", bucket, e)))?;

            if let Some(contents) = resp.contents {
                for obj in contents {
                    if let Some(entry) = entry_from_object(obj) {
                        yield entry;
                    }
                }
            }

            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }
    }
}

/// `path` -> `path/`, leaving the empty (root) path empty.
fn dir_prefix(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!("{path}/")
    }
}

/// Convert a listed object into a file entry; markers and empty keys are dropped.
fn entry_from_object(obj: Object) -> Option<ObjectEntry> {
    let key = obj.key.unwrap_or_default();
    if key.is_empty() || key.ends_with('/') {
        return None;
    }

    let mut entry = ObjectEntry::file(key, obj.size.unwrap_or(0).max(0) as u64);
    if let Some(ts) = obj
        .last_modified
        .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
    {
        entry = entry.with_last_modified(ts);
    }
    Some(entry)
}

/// Convert a common prefix into a directory entry.
fn entry_from_prefix(cp: CommonPrefix) -> Option<ObjectEntry> {
    let prefix = cp.prefix.unwrap_or_default();
    if prefix.is_empty() {
        return None;
    }
    Some(ObjectEntry::dir(prefix))
}

/// Map an SDK error onto the storage error surface.
///
/// The connector does no recovery; this keeps error *identity* (not
/// found, access denied, already exists) visible to callers while
/// everything else passes through as a request failure.
fn storage_error<E>(op: &str, path: &str, err: E) -> StorageError
where
    E: ProvideErrorMetadata + std::fmt::Debug,
{
    match err.code() {
        Some("NoSuchKey") | Some("NoSuchBucket") | Some("NotFound") => {
            StorageError::NotFound(path.to_string())
        }
        Some("AccessDenied") | Some("InvalidAccessKeyId") | Some("SignatureDoesNotMatch") => {
            StorageError::AccessDenied(format!(
                "{op} {path}: {}",
                err.message().unwrap_or("access denied")
            ))
        }
        _ => StorageError::Request(format!("{op} {path}: {err:?}")),
    }
}
