//! TAR block decoder.
//!
//! Parses a decompressed POSIX TAR buffer into raw entries. Only the fields
//! needed for import are read: the 100-byte name, the octal size and the
//! typeflag. Parsing is lenient by contract:
//!
//! - fewer than 512 bytes left at a header position ends the stream,
//! - an all-zero header block ends the stream,
//! - a size running past the buffer yields whatever bytes remain.
//!
//! Any exit other than the all-zero block is logged at debug level and
//! reported through [`TarScan::reached_end_marker`].
//!
//! Directory entries and entries with an empty name are skipped. Every other
//! typeflag (symlink, hardlink, GNU long name, PAX header) is emitted as a
//! regular file carrying its payload; link targets and extended headers are
//! not interpreted.

use crate::error::DecodeError;
use crate::types::RawEntry;

use super::traits::ArchiveDecoder;

/// Size of a TAR header or data block.
pub const BLOCK_SIZE: usize = 512;

const NAME_RANGE: std::ops::Range<usize> = 0..100;
const SIZE_RANGE: std::ops::Range<usize> = 124..136;
const TYPEFLAG_OFFSET: usize = 156;

/// Typeflag marking a directory entry.
pub const DIRECTORY_TYPEFLAG: u8 = b'5';

/// Fields read from one header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarHeader {
    /// Entry name, cut at the first NUL and stripped of trailing whitespace.
    pub name: String,
    /// Payload size in bytes.
    pub size: u64,
    /// Raw typeflag byte.
    pub typeflag: u8,
}

impl TarHeader {
    /// Parses the fields of a 512-byte header block.
    #[must_use]
    pub fn parse(block: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            name: parse_name(&block[NAME_RANGE]),
            size: parse_octal(&block[SIZE_RANGE]),
            typeflag: block[TYPEFLAG_OFFSET],
        }
    }

    /// Returns `true` for directory entries.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.typeflag == DIRECTORY_TYPEFLAG
    }

    /// Returns `true` for regular files (`'0'` or the legacy NUL flag).
    #[must_use]
    pub const fn is_regular_file(&self) -> bool {
        matches!(self.typeflag, b'0' | 0)
    }
}

/// TAR decoder operating on an already decompressed buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TarDecoder;

impl TarDecoder {
    /// Creates a new TAR decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decodes every entry up to the end marker or the end of the buffer.
    ///
    /// Never fails. A truncated buffer yields the entries parsed so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbundle_core::formats::TarDecoder;
    ///
    /// // A buffer shorter than one header block decodes to nothing.
    /// assert!(TarDecoder::new().decode_entries(&[0u8; 100]).is_empty());
    /// ```
    #[must_use]
    pub fn decode_entries(&self, data: &[u8]) -> Vec<RawEntry> {
        self.scan(data).entries
    }

    /// Decodes entries and records how the stream ended.
    #[must_use]
    pub fn scan(&self, data: &[u8]) -> TarScan {
        let mut entries = Vec::new();
        let mut offset = 0usize;
        let mut reached_end_marker = false;

        while let Some(block) = data
            .get(offset..offset.saturating_add(BLOCK_SIZE))
            .and_then(|b| <&[u8; BLOCK_SIZE]>::try_from(b).ok())
        {
            if block.iter().all(|&b| b == 0) {
                reached_end_marker = true;
                break;
            }

            let header = TarHeader::parse(block);
            offset += BLOCK_SIZE;

            let size = usize::try_from(header.size).unwrap_or(usize::MAX);
            let start = offset.min(data.len());
            let end = offset.saturating_add(size).min(data.len());
            if end - start < size {
                tracing::debug!(
                    name = %header.name,
                    declared = size,
                    available = end - start,
                    "tar entry payload truncated"
                );
            }

            offset = offset.saturating_add(padded_len(size));

            if header.name.is_empty() || header.is_directory() {
                continue;
            }
            if !header.is_regular_file() {
                tracing::debug!(
                    name = %header.name,
                    typeflag = %char::from(header.typeflag).escape_default(),
                    "tar entry type not modeled; emitting payload as a file"
                );
            }

            entries.push(RawEntry::new(header.name, data[start..end].to_vec()));
        }

        if !reached_end_marker {
            tracing::debug!(
                entries = entries.len(),
                trailing = data.len().saturating_sub(offset),
                "tar stream ends without end-of-archive marker"
            );
        }

        TarScan {
            entries,
            reached_end_marker,
        }
    }
}

/// Result of [`TarDecoder::scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarScan {
    /// Entries decoded before the stream ended.
    pub entries: Vec<RawEntry>,
    /// Whether an all-zero header block terminated the stream.
    pub reached_end_marker: bool,
}

impl ArchiveDecoder for TarDecoder {
    fn decode(&self, data: &[u8]) -> Result<Vec<RawEntry>, DecodeError> {
        Ok(self.decode_entries(data))
    }

    fn format_name(&self) -> &'static str {
        "tar"
    }
}

/// Rounds `size` up to the next block boundary.
fn padded_len(size: usize) -> usize {
    size.div_ceil(BLOCK_SIZE).saturating_mul(BLOCK_SIZE)
}

fn parse_name(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).trim_end().to_string()
}

/// Parses a NUL/space padded ASCII octal field; an empty field is zero.
///
/// Digits are read up to the first non-octal byte, so trailing garbage is
/// ignored rather than rejected.
fn parse_octal(field: &[u8]) -> u64 {
    field
        .iter()
        .skip_while(|&&b| b == b' ' || b == 0)
        .take_while(|b| (b'0'..=b'7').contains(*b))
        .fold(0u64, |acc, &b| {
            acc.saturating_mul(8).saturating_add(u64::from(b - b'0'))
        })
}
