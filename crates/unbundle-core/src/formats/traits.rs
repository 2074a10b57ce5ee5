//! Decoder capabilities used by the expansion pipeline.
//!
//! Decoders operate on whole in-memory buffers. Keeping them behind these
//! traits lets the pipeline run against synthetic decoders in tests.

use crate::error::DecodeError;
use crate::types::RawEntry;

/// Decodes a multi-entry archive buffer into raw entries.
pub trait ArchiveDecoder {
    /// Decodes `data` into entries in archive order.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is not a valid archive of this format.
    fn decode(&self, data: &[u8]) -> Result<Vec<RawEntry>, DecodeError>;

    /// Returns the archive format name.
    fn format_name(&self) -> &'static str;
}

/// Decodes a single compressed stream into its payload.
pub trait StreamDecoder {
    /// Decompresses `data` into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is malformed.
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError>;

    /// Returns the compression format name.
    fn format_name(&self) -> &'static str;
}
