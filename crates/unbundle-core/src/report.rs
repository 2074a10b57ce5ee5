//! Expansion results.

use serde::Serialize;

/// A single normalized file produced by an expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedFile {
    /// Normalized relative path (forward slashes, no leading `/` or `./`).
    pub path: String,

    /// Raw file content.
    #[serde(skip)]
    pub content: Vec<u8>,

    /// MIME type inferred from the path's extension.
    pub mime_type: String,
}

impl ExpandedFile {
    /// Content length in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Report of an expansion: the produced files plus discarded OS junk paths.
///
/// Both sequences keep input and decoding order. Paths are not
/// de-duplicated; an archive holding the same path twice yields two files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpandFilesReport {
    /// Files in input order.
    pub files: Vec<ExpandedFile>,

    /// Normalized paths dropped as operating-system metadata.
    #[serde(rename = "ignoredMacJunkPaths")]
    pub ignored_mac_junk_paths: Vec<String>,
}

impl ExpandFilesReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends another report, keeping order.
    pub fn merge(&mut self, other: Self) {
        self.files.extend(other.files);
        self.ignored_mac_junk_paths
            .extend(other.ignored_mac_junk_paths);
    }

    /// Number of files produced.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total content size over all files, in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.content.len() as u64).sum()
    }

    /// Returns whether any junk paths were discarded.
    #[must_use]
    pub fn has_ignored_junk(&self) -> bool {
        !self.ignored_mac_junk_paths.is_empty()
    }
}
