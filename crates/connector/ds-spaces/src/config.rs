//! Connection configuration for DigitalOcean Spaces.

use ds_error::{DsError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for Spaces access.
///
/// Immutable after construction. The extension-to-reader mapping and the
/// per-file metadata function are not part of this struct - they are not
/// serializable and live on the connector beside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacesConfig {
    /// Bucket (Space) name
    pub bucket: String,

    /// Load exactly this object instead of enumerating the bucket
    pub key: Option<String>,

    /// Prefix to enumerate under when no key is set (empty = bucket root)
    #[serde(default)]
    pub prefix: String,

    /// Whether enumeration descends into sub-prefixes
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Only load files with these extensions
    pub required_exts: Option<Vec<String>>,

    /// Use file paths as document identifiers instead of UUIDs
    #[serde(default = "default_true")]
    pub filename_as_id: bool,

    /// Maximum number of files to load
    pub num_files_limit: Option<usize>,

    /// Spaces access key ID
    pub key_id: String,

    /// Spaces secret access key
    pub secret_key: String,

    /// Spaces endpoint URL (e.g. `https://nyc3.digitaloceanspaces.com`)
    pub endpoint: String,

    /// Region override; derived from the endpoint host when absent
    pub region: Option<String>,
}

fn default_true() -> bool {
    true
}

impl SpacesConfig {
    /// Create a configuration with the required fields.
    pub fn new(
        bucket: impl Into<String>,
        key_id: impl Into<String>,
        secret_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            key: None,
            prefix: String::new(),
            recursive: true,
            required_exts: None,
            filename_as_id: true,
            num_files_limit: None,
            key_id: key_id.into(),
            secret_key: secret_key.into(),
            endpoint: endpoint.into(),
            region: None,
        }
    }

    /// Target a single object key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the enumeration prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set whether enumeration descends into sub-prefixes.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Restrict loading to the given extensions.
    pub fn with_required_exts(
        mut self,
        exts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.required_exts = Some(exts.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether file paths become document identifiers.
    pub fn with_filename_as_id(mut self, filename_as_id: bool) -> Self {
        self.filename_as_id = filename_as_id;
        self
    }

    /// Set the maximum number of files to load.
    pub fn with_num_files_limit(mut self, limit: usize) -> Self {
        self.num_files_limit = Some(limit);
        self
    }

    /// Override the region instead of deriving it from the endpoint.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Check that required fields are present and the endpoint parses.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(DsError::Config("bucket is required".to_string()));
        }
        if self.key_id.is_empty() || self.secret_key.is_empty() {
            return Err(DsError::Config(
                "key_id and secret_key are required".to_string(),
            ));
        }
        Url::parse(&self.endpoint)
            .map_err(|e| DsError::Config(format!("Invalid endpoint '{}': {}", self.endpoint, e)))?;
        Ok(())
    }

    /// The region to sign requests with.
    ///
    /// Explicit override wins; otherwise the first label of the endpoint
    /// host (`https://nyc3.digitaloceanspaces.com` -> `nyc3`). Hosts
    /// without a derivable region (IPs, localhost) fall back to
    /// `us-east-1`, which S3-compatible endpoints accept.
    pub fn resolved_region(&self) -> String {
        if let Some(region) = &self.region {
            return region.clone();
        }

        Url::parse(&self.endpoint)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .and_then(|host| {
                let (first, rest) = host.split_once('.')?;
                if rest.contains('.') && first.parse::<u8>().is_err() {
                    Some(first.to_string())
                } else {
                    None
                }
            })
            .unwrap_or_else(|| "us-east-1".to_string())
    }
}
