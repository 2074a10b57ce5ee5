//! GZIP decompression backed by `flate2`.

use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::DecodeError;

use super::traits::StreamDecoder;

/// Whole-buffer GZIP decompressor.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipDecoder;

impl GzipDecoder {
    /// Creates a new GZIP decoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StreamDecoder for GzipDecoder {
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut decoder = GzDecoder::new(data);
        let mut out = Vec::with_capacity(data.len().saturating_mul(2));
        decoder.read_to_end(&mut out)?;
        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "gzip"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::gzip_bytes;

    #[test]
    fn test_roundtrip_payload() {
        let compressed = gzip_bytes(b"hello gzip");
        assert_eq!(GzipDecoder::new().decode(&compressed).unwrap(), b"hello gzip");
    }

    #[test]
    fn test_rejects_bad_header() {
        let result = GzipDecoder::new().decode(b"plain text, not gzip");
        assert!(matches!(result, Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_rejects_truncated_stream() {
        let compressed = gzip_bytes(&b"abcdefgh".repeat(64));
        let result = GzipDecoder::new().decode(&compressed[..compressed.len() / 2]);
        assert!(result.is_err());
    }
}
