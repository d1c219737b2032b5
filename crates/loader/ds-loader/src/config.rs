//! Configuration types for the directory loader.

use serde::{Deserialize, Serialize};

/// What the loader should read: a directory root or explicit files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoaderInput {
    /// Traverse a directory root (empty string = store root)
    Directory { root: String },

    /// Read exactly these files, bypassing filters and the file limit
    Files { paths: Vec<String> },
}

/// Configuration for a load run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// The traversal target
    pub input: LoaderInput,

    /// Only load files whose extension is in this set (lowercase, no dot)
    pub required_exts: Option<Vec<String>>,

    /// Whether to descend into sub-prefixes of the root
    pub recursive: bool,

    /// Maximum number of files to load (applied after sorting)
    pub num_files_limit: Option<usize>,

    /// Use the file path as the document identifier instead of a UUID
    pub filename_as_id: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            input: LoaderInput::Directory {
                root: String::new(),
            },
            required_exts: None,
            recursive: true,
            num_files_limit: None,
            filename_as_id: true,
        }
    }
}

impl LoaderConfig {
    /// Configure a load over a directory root.
    pub fn directory(root: impl Into<String>) -> Self {
        Self {
            input: LoaderInput::Directory { root: root.into() },
            ..Default::default()
        }
    }

    /// Configure a load over an explicit file list.
    pub fn files(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            input: LoaderInput::Files {
                paths: paths.into_iter().map(Into::into).collect(),
            },
            ..Default::default()
        }
    }

    /// Restrict loading to the given extensions (lowercased, dots stripped).
    pub fn with_required_exts(
        mut self,
        exts: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.required_exts = Some(
            exts.into_iter()
                .map(|e| {
                    let e = e.into();
                    e.trim_start_matches('.').to_ascii_lowercase()
                })
                .collect(),
        );
        self
    }

    /// Set whether traversal descends into sub-prefixes.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the maximum number of files to load.
    pub fn with_num_files_limit(mut self, limit: usize) -> Self {
        self.num_files_limit = Some(limit);
        self
    }

    /// Set whether file paths become document identifiers.
    pub fn with_filename_as_id(mut self, filename_as_id: bool) -> Self {
        self.filename_as_id = filename_as_id;
        self
    }
}
