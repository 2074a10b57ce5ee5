//! Named, byte-bearing inputs.

use std::io;
use std::path::Path;
use std::path::PathBuf;

/// A named input whose bytes are read asynchronously.
///
/// The name drives format dispatch (`.zip`, `.tar.gz`, `.tgz`, `.gz`) and,
/// for loose files, becomes the output path after normalization.
#[allow(async_fn_in_trait)]
pub trait FileBlob {
    /// Name or relative path of the input.
    fn name(&self) -> &str;

    /// Reads the whole content into memory.
    async fn read_bytes(&self) -> io::Result<Vec<u8>>;
}

/// An input already held in memory.
///
/// # Examples
///
/// ```
/// use unbundle_core::MemoryFile;
/// use unbundle_core::FileBlob;
///
/// let file = MemoryFile::new("SKILL.md", b"# Demo".to_vec());
/// assert_eq!(file.name(), "SKILL.md");
/// assert_eq!(file.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryFile {
    name: String,
    data: Vec<u8>,
}

impl MemoryFile {
    /// Creates an in-memory input.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Content as a byte slice.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl FileBlob for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}

/// An input backed by a file on disk, read with `tokio::fs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskFile {
    name: String,
    path: PathBuf,
}

impl DiskFile {
    /// Creates a disk input with an explicit logical name.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a disk input named after the file name of `path`.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
            .into_owned();
        Self { name, path }
    }

    /// Location on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileBlob for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_file_read() {
        let file = MemoryFile::new("a.txt", b"hello".to_vec());
        assert_eq!(file.read_bytes().await.unwrap(), b"hello");
        assert!(!file.is_empty());
    }

    #[tokio::test]
    async fn test_disk_file_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.md");
        std::fs::write(&path, "# Notes").unwrap();

        let file = DiskFile::from_path(&path);
        assert_eq!(file.name(), "notes.md");
        assert_eq!(file.path(), path.as_path());
        assert_eq!(file.read_bytes().await.unwrap(), b"# Notes");
    }

    #[tokio::test]
    async fn test_disk_file_missing() {
        let file = DiskFile::new("gone.md", "/nonexistent/unbundle/gone.md");
        let err = file.read_bytes().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
