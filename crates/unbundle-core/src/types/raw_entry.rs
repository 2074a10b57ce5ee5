//! Decoded archive entry.

/// A `(path, data)` pair produced by a decoder.
///
/// Paths are raw until the pipeline normalizes them; after normalization
/// they contain no NUL byte, no backslash, and no leading `/` or `./`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Entry path as stored in the archive.
    pub path: String,

    /// Entry content.
    pub data: Vec<u8>,
}

impl RawEntry {
    /// Creates an entry from a path and its content.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbundle_core::RawEntry;
    ///
    /// let entry = RawEntry::new("docs/intro.md", b"# Intro".to_vec());
    /// assert_eq!(entry.path, "docs/intro.md");
    /// assert_eq!(entry.data, b"# Intro");
    /// ```
    #[must_use]
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}
