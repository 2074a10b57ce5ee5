//! Drag-and-drop directory tree collection.
//!
//! A dropped item exposes either a direct file or a hierarchical entry
//! handle. Entry handles are walked depth-first into a flat list of files
//! with full relative paths. Directory listings arrive in bounded batches,
//! so each directory is read with a pull loop until an empty batch comes
//! back.
//!
//! Traversal is sequential: siblings are never read concurrently, which
//! keeps the output order deterministic.

pub mod fs;

use std::io;

use crate::error::ExpandError;
use crate::error::Result;
use crate::types::FileBlob;

pub use fs::FsDirectoryReader;
pub use fs::FsEntry;

/// Kind of a hierarchical entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory with enumerable children.
    Directory,
    /// Anything else (symlink, device, unknown); skipped.
    Other,
}

/// A hierarchical file-system entry handle.
#[allow(async_fn_in_trait)]
pub trait EntryHandle: Sized {
    /// File blob produced for file entries.
    type File: FileBlob;

    /// Child enumerator for directory entries.
    type Reader: DirectoryReader<Entry = Self>;

    /// Entry's own name (last path segment).
    fn name(&self) -> &str;

    /// Platform-provided full path, if any. Takes precedence over joining
    /// the parent path with [`name`](Self::name).
    fn full_path(&self) -> Option<&str>;

    /// Entry kind.
    fn kind(&self) -> EntryKind;

    /// Resolves the file blob of a file entry.
    async fn file(&self) -> io::Result<Self::File>;

    /// Opens the child enumerator of a directory entry.
    fn reader(&self) -> Self::Reader;
}

/// Chunked child enumeration for a directory.
#[allow(async_fn_in_trait)]
pub trait DirectoryReader {
    /// Child entry type.
    type Entry;

    /// Returns the next batch of children; an empty batch means exhausted.
    async fn read_batch(&mut self) -> io::Result<Vec<Self::Entry>>;
}

/// One item of a drop.
pub enum DropItem<E: EntryHandle> {
    /// Item exposing a hierarchical entry handle.
    Entry(E),
    /// Item exposing only a direct file.
    File(E::File),
    /// Item with no recognized capability.
    Unsupported,
}

/// A collected file with its resolved relative path.
///
/// Its [`FileBlob::name`] is the resolved path, so format dispatch and
/// output naming see the full location inside the dropped tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile<F> {
    /// Resolved path (`parent/child/name` or the platform hint).
    pub path: String,
    /// Underlying file blob.
    pub file: F,
}

impl<F: FileBlob> FileBlob for CollectedFile<F> {
    fn name(&self) -> &str {
        &self.path
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        self.file.read_bytes().await
    }
}

/// Flattens dropped items into files with full relative paths.
///
/// Output order is item order, then depth-first pre-order within each tree,
/// children in the order their reader returned them.
///
/// # Errors
///
/// Returns [`ExpandError::DirectoryRead`] if a directory listing fails and
/// [`ExpandError::Io`] if a file entry cannot be resolved.
pub async fn collect_drop<E: EntryHandle>(
    items: Vec<DropItem<E>>,
) -> Result<Vec<CollectedFile<E::File>>> {
    let mut files = Vec::new();

    for item in items {
        match item {
            DropItem::Entry(entry) => walk_entry(entry, &mut files).await?,
            DropItem::File(file) => files.push(CollectedFile {
                path: file.name().to_string(),
                file,
            }),
            DropItem::Unsupported => tracing::trace!("skipping drop item without file or entry"),
        }
    }

    Ok(files)
}

/// Walks one entry tree depth-first using an explicit stack.
async fn walk_entry<E: EntryHandle>(
    root: E,
    files: &mut Vec<CollectedFile<E::File>>,
) -> Result<()> {
    let mut stack = vec![(root, String::new())];

    while let Some((entry, parent)) = stack.pop() {
        let path = resolve_path(&entry, &parent);

        match entry.kind() {
            EntryKind::File => {
                let file = entry.file().await?;
                files.push(CollectedFile { path, file });
            }
            EntryKind::Directory => {
                let children = read_all_children(entry.reader(), &path).await?;
                tracing::trace!(dir = %path, children = children.len(), "listed directory");
                stack.extend(children.into_iter().rev().map(|c| (c, path.clone())));
            }
            EntryKind::Other => tracing::trace!(path = %path, "skipping unsupported entry"),
        }
    }

    Ok(())
}

/// Pulls batches until the reader returns an empty one.
async fn read_all_children<R: DirectoryReader>(mut reader: R, path: &str) -> Result<Vec<R::Entry>> {
    let mut children = Vec::new();

    loop {
        let batch = reader
            .read_batch()
            .await
            .map_err(|source| ExpandError::DirectoryRead {
                path: path.to_string(),
                source,
            })?;
        if batch.is_empty() {
            return Ok(children);
        }
        children.extend(batch);
    }
}

fn resolve_path<E: EntryHandle>(entry: &E, parent: &str) -> String {
    if let Some(full) = entry.full_path() {
        return full.to_string();
    }
    if parent.is_empty() {
        entry.name().to_string()
    } else {
        format!("{parent}/{}", entry.name())
    }
}
