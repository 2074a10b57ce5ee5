//! Normalizes uploaded file bundles into flat sets of text files.
//!
//! `unbundle-core` accepts loose files, dropped directory trees, ZIP
//! archives, bare GZIP files and TAR-over-GZIP archives, and turns them into
//! one ordered list of `(path, content, mime type)` records ready for import.
//!
//! Along the way it canonicalizes paths, discards operating-system metadata
//! (`__MACOSX/`, `.DS_Store`, `._*` shadow files), keeps only recognized
//! text files from archives, and strips a single root folder shared by every
//! archive entry.
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use std::io::Write;
//! use unbundle_core::ExpandConfig;
//! use unbundle_core::expand_bytes;
//! use zip::write::SimpleFileOptions;
//! use zip::write::ZipWriter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
//! for (path, data) in [("demo-main/SKILL.md", &b"# Demo"[..]), ("demo-main/.DS_Store", &b""[..])] {
//!     writer.start_file(path, SimpleFileOptions::default())?;
//!     writer.write_all(data)?;
//! }
//! let zip = writer.finish()?.into_inner();
//!
//! let report = expand_bytes("demo.zip", zip, &ExpandConfig::default())?;
//! assert_eq!(report.files[0].path, "SKILL.md");
//! assert_eq!(report.files[0].mime_type, "text/markdown");
//! assert_eq!(report.ignored_mac_junk_paths, ["demo-main/.DS_Store"]);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod collect;
pub mod config;
pub mod error;
pub mod formats;
pub mod mime;
pub mod normalize;
pub mod pipeline;
pub mod report;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::Expander;
pub use api::expand_bytes;
pub use api::expand_drop;
pub use api::expand_files;
pub use collect::DropItem;
pub use collect::EntryHandle;
pub use config::ExpandConfig;
pub use error::DecodeError;
pub use error::ExpandError;
pub use error::Result;
pub use report::ExpandFilesReport;
pub use report::ExpandedFile;

// Re-export types module for easier access
pub use types::DiskFile;
pub use types::FileBlob;
pub use types::MemoryFile;
pub use types::RawEntry;
