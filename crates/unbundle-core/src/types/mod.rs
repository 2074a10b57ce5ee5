//! Entry and input types shared by decoders, the pipeline and the collector.

pub mod blob;
pub mod raw_entry;

pub use blob::DiskFile;
pub use blob::FileBlob;
pub use blob::MemoryFile;
pub use raw_entry::RawEntry;
