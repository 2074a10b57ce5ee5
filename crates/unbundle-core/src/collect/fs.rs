//! Filesystem-backed entry handles.
//!
//! Lets on-disk folders go through the same collector as dropped trees.
//! Listings are sorted by name and handed out in bounded batches.

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::types::DiskFile;

use super::DirectoryReader;
use super::EntryHandle;
use super::EntryKind;

/// Default number of children returned per [`DirectoryReader::read_batch`].
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// An entry on the local filesystem.
///
/// Symbolic links are not followed; they are reported as
/// [`EntryKind::Other`] and skipped by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    batch_size: usize,
}

impl FsEntry {
    /// Inspects `path` and builds an entry named after its last component.
    ///
    /// # Errors
    ///
    /// Returns an error if the path metadata cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file_type = tokio::fs::symlink_metadata(&path).await?.file_type();
        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
            .into_owned();

        Ok(Self {
            name,
            kind: kind_of(file_type),
            path,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    /// Sets how many children a directory reader returns per batch.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Location on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryHandle for FsEntry {
    type File = DiskFile;
    type Reader = FsDirectoryReader;

    fn name(&self) -> &str {
        &self.name
    }

    fn full_path(&self) -> Option<&str> {
        None
    }

    fn kind(&self) -> EntryKind {
        self.kind
    }

    async fn file(&self) -> io::Result<DiskFile> {
        Ok(DiskFile::new(self.name.clone(), self.path.clone()))
    }

    fn reader(&self) -> FsDirectoryReader {
        FsDirectoryReader {
            dir: self.path.clone(),
            batch_size: self.batch_size,
            pending: None,
        }
    }
}

/// Batched, name-sorted listing of a directory.
///
/// The directory is read once on the first call; later calls drain the
/// sorted listing `batch_size` entries at a time.
#[derive(Debug)]
pub struct FsDirectoryReader {
    dir: PathBuf,
    batch_size: usize,
    pending: Option<VecDeque<FsEntry>>,
}

impl FsDirectoryReader {
    async fn load(&self) -> io::Result<VecDeque<FsEntry>> {
        let mut listing = Vec::new();
        let mut read_dir = tokio::fs::read_dir(&self.dir).await?;

        while let Some(child) = read_dir.next_entry().await? {
            listing.push(FsEntry {
                name: child.file_name().to_string_lossy().into_owned(),
                kind: kind_of(child.file_type().await?),
                path: child.path(),
                batch_size: self.batch_size,
            });
        }

        listing.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listing.into())
    }
}

impl DirectoryReader for FsDirectoryReader {
    type Entry = FsEntry;

    async fn read_batch(&mut self) -> io::Result<Vec<FsEntry>> {
        if self.pending.is_none() {
            self.pending = Some(self.load().await?);
        }

        let Some(pending) = self.pending.as_mut() else {
            return Ok(Vec::new());
        };
        let take = self.batch_size.min(pending.len());
        Ok(pending.drain(..take).collect())
    }
}

fn kind_of(file_type: std::fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
