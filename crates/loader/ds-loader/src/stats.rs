//! Counters for a load run.

/// Statistics collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Files seen during traversal (before filtering)
    pub files_listed: usize,

    /// Files dropped by the required-extensions filter or the file limit
    pub files_filtered: usize,

    /// Files successfully parsed
    pub files_loaded: usize,

    /// Documents produced
    pub documents: usize,
}

impl LoadStats {
    /// Create zeroed stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parsed file and the documents it produced.
    pub fn record_loaded(&mut self, documents: usize) {
        self.files_loaded += 1;
        self.documents += documents;
    }
}
