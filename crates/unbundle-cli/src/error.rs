//! Error conversion utilities for CLI.
//!
//! Converts unbundle-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use unbundle_core::DecodeError;
use unbundle_core::ExpandError;

/// Converts `ExpandError` to a user-friendly anyhow error with context.
pub fn convert_expand_error(err: ExpandError) -> anyhow::Error {
    match err {
        ExpandError::Decode {
            name,
            format,
            source: DecodeError::Malformed(reason),
        } => anyhow!(
            "Invalid {format} data in '{name}': {reason}\n\
             HINT: The file may be truncated or mislabeled. Check its extension."
        ),
        ExpandError::Decode {
            name,
            format,
            source,
        } => anyhow!(
            "Could not decode '{name}' as {format}: {source}\n\
             HINT: The archive may be corrupted. Re-export it and try again."
        ),
        ExpandError::DirectoryRead { path, source } => anyhow!(
            "Failed to list directory '{path}': {source}\n\
             HINT: Check that the folder exists and is readable."
        ),
        ExpandError::Io(io_err) => anyhow!("I/O error while reading input: {io_err}"),
    }
}

/// Adds context to an expansion result.
pub fn add_expand_context<T>(result: Result<T, ExpandError>) -> anyhow::Result<T> {
    result.map_err(convert_expand_error)
}
