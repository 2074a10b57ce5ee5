//! Archive and compression decoders.

pub mod detect;
pub mod gzip;
pub mod tar;
pub mod traits;
pub mod zip;

// Re-export main types for convenience
pub use detect::InputKind;
pub use gzip::GzipDecoder;
pub use tar::TarDecoder;
pub use tar::TarScan;
pub use traits::ArchiveDecoder;
pub use traits::StreamDecoder;
pub use zip::ZipDecoder;
