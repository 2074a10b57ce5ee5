//! Test utilities for building in-memory bundles.
//!
//! Helpers for ZIP, TAR and GZIP fixtures shared by unit tests, integration
//! tests and benches.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::formats::tar::BLOCK_SIZE;

/// Creates an in-memory TAR archive from a list of `(path, content)` pairs.
///
/// # Examples
///
/// ```
/// use unbundle_core::test_utils::create_test_tar;
///
/// let tar_data = create_test_tar(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// assert_eq!(tar_data.len() % 512, 0);
/// ```
#[must_use]
pub fn create_test_tar(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    entries
        .into_iter()
        .fold(TarTestBuilder::new(), |builder, (path, data)| {
            builder.add_file(path, data)
        })
        .build()
}

/// Creates an in-memory `.tar.gz` from a list of `(path, content)` pairs.
#[must_use]
pub fn create_test_tar_gz(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    gzip_bytes(&create_test_tar(entries))
}

/// Creates an in-memory ZIP archive with stored (uncompressed) entries.
///
/// # Examples
///
/// ```
/// use unbundle_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// assert!(zip_data.starts_with(b"PK"));
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    build_zip(entries, zip::CompressionMethod::Stored)
}

/// Creates an in-memory ZIP archive with deflate-compressed entries.
#[must_use]
pub fn create_test_zip_deflated(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    build_zip(entries, zip::CompressionMethod::Deflated)
}

fn build_zip(entries: Vec<(&str, &[u8])>, method: zip::CompressionMethod) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(method)
        .unix_permissions(0o644);

    for (path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Gzip-compresses a buffer.
#[must_use]
pub fn gzip_bytes(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Builds a raw 512-byte ustar header block by hand.
///
/// `name` is truncated to 100 bytes; `size` is written as 11 octal digits.
/// Useful for headers the `tar` crate refuses to produce (empty names,
/// arbitrary typeflags, sizes larger than the payload).
#[must_use]
pub fn raw_tar_header(name: &str, size: u64, typeflag: u8) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];

    let name = name.as_bytes();
    let len = name.len().min(100);
    block[..len].copy_from_slice(&name[..len]);
    block[100..108].copy_from_slice(b"0000644\0");
    block[108..116].copy_from_slice(b"0000000\0");
    block[116..124].copy_from_slice(b"0000000\0");
    block[124..136].copy_from_slice(format!("{size:011o}\0").as_bytes());
    block[136..148].copy_from_slice(b"00000000000\0");
    block[156] = typeflag;
    block[257..263].copy_from_slice(b"ustar\0");
    block[263..265].copy_from_slice(b"00");

    block[148..156].copy_from_slice(b"        ");
    let checksum: u32 = block.iter().map(|&b| u32::from(b)).sum();
    block[148..156].copy_from_slice(format!("{checksum:06o}\0 ").as_bytes());

    block
}

/// Builder for TAR test archives with files, directories and symlinks.
///
/// # Examples
///
/// ```
/// use unbundle_core::test_utils::TarTestBuilder;
///
/// let tar_data = TarTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .add_symlink("link", "file.txt")
///     .build();
/// ```
pub struct TarTestBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarTestBuilder {
    /// Creates a new TAR test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    /// Adds a regular file to the archive.
    #[must_use]
    pub fn add_file(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    /// Adds a directory to the archive.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o755);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a symlink to the archive.
    #[must_use]
    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o777);
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Finishes the archive (writing the end-of-archive blocks).
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }

    /// Finishes the archive and gzip-compresses it.
    #[must_use]
    pub fn build_gz(self) -> Vec<u8> {
        gzip_bytes(&self.build())
    }
}

impl Default for TarTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_header_checksum_accepted_by_tar_crate() {
        let mut data = raw_tar_header("hello.txt", 5, b'0').to_vec();
        data.extend_from_slice(b"hello");
        data.resize(BLOCK_SIZE * 4, 0);

        let mut archive = tar::Archive::new(Cursor::new(data));
        let mut entries = archive.entries().unwrap();
        let entry = entries.next().unwrap().unwrap();
        assert_eq!(entry.path().unwrap().to_str(), Some("hello.txt"));
        assert_eq!(entry.header().size().unwrap(), 5);
    }

    #[test]
    fn test_builder_appends_end_marker() {
        let data = TarTestBuilder::new().add_file("a.txt", b"a").build();
        assert!(data[data.len() - BLOCK_SIZE..].iter().all(|&b| b == 0));
    }
}
