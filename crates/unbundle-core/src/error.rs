//! Error types for bundle expansion.

use thiserror::Error;

/// Result type alias using `ExpandError`.
pub type Result<T> = std::result::Result<T, ExpandError>;

/// Failure reported by a whole-buffer decode primitive (ZIP or GZIP).
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The ZIP reader rejected the buffer.
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    /// The decompressor failed while reading the stream.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The buffer is structurally invalid for this format.
    #[error("{0}")]
    Malformed(String),
}

/// Errors that can abort an expansion invocation.
///
/// Entry-level filtering and lenient TAR parsing never produce errors; only
/// whole-input failures reach the caller.
#[derive(Error, Debug)]
pub enum ExpandError {
    /// Reading an input blob failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A ZIP or GZIP primitive rejected the whole buffer of an input item.
    #[error("invalid {format} data in '{name}': {source}")]
    Decode {
        /// Name of the input item being decoded.
        name: String,
        /// Format name of the decoder that failed.
        format: &'static str,
        /// Underlying decoder failure.
        #[source]
        source: DecodeError,
    },

    /// Listing the children of a dropped directory failed.
    #[error("failed to read directory '{path}': {source}")]
    DirectoryRead {
        /// Resolved path of the directory.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl ExpandError {
    /// Returns `true` if a decompression primitive rejected the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbundle_core::DecodeError;
    /// use unbundle_core::ExpandError;
    ///
    /// let err = ExpandError::Decode {
    ///     name: "bundle.zip".into(),
    ///     format: "zip",
    ///     source: DecodeError::Malformed("bad central directory".into()),
    /// };
    /// assert!(err.is_decode_error());
    /// ```
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the input item or directory the error is attached to, if any.
    #[must_use]
    pub fn item_name(&self) -> Option<&str> {
        match self {
            Self::Decode { name, .. } => Some(name),
            Self::DirectoryRead { path, .. } => Some(path),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = ExpandError::Decode {
            name: "skills.zip".into(),
            format: "zip",
            source: DecodeError::Malformed("truncated".into()),
        };
        let display = err.to_string();
        assert!(display.contains("zip"));
        assert!(display.contains("skills.zip"));
        assert!(display.contains("truncated"));
        assert_eq!(err.item_name(), Some("skills.zip"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpandError = io_err.into();
        assert!(matches!(err, ExpandError::Io(_)));
        assert!(!err.is_decode_error());
        assert_eq!(err.item_name(), None);
    }

    #[test]
    fn test_directory_read_error() {
        let err = ExpandError::DirectoryRead {
            path: "docs/guides".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("docs/guides"));
        assert_eq!(err.item_name(), Some("docs/guides"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let err = ExpandError::Decode {
            name: "a.gz".into(),
            format: "gzip",
            source: DecodeError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "invalid gzip header",
            )),
        };
        let source = err.source();
        assert!(source.is_some());
        assert!(
            source
                .map(ToString::to_string)
                .is_some_and(|s| s.contains("invalid gzip header"))
        );
    }
}
