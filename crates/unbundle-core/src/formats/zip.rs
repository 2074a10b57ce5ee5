//! ZIP decoding backed by the `zip` crate.

use std::io::Cursor;
use std::io::Read;

use crate::error::DecodeError;
use crate::types::RawEntry;

use super::traits::ArchiveDecoder;

/// Whole-buffer ZIP decoder.
///
/// Directory records are skipped; every file record is returned with its
/// stored name, in central-directory order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipDecoder;

impl ZipDecoder {
    /// Creates a new ZIP decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveDecoder for ZipDecoder {
    fn decode(&self, data: &[u8]) -> Result<Vec<RawEntry>, DecodeError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        let mut entries = Vec::with_capacity(archive.len());

        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }

            let name = file.name().to_string();
            let capacity = usize::try_from(file.size()).unwrap_or(0);
            let mut content = Vec::with_capacity(capacity.min(data.len().saturating_mul(4)));
            file.read_to_end(&mut content)?;

            entries.push(RawEntry::new(name, content));
        }

        Ok(entries)
    }

    fn format_name(&self) -> &'static str {
        "zip"
    }
}
