//! Path normalization and entry filtering.
//!
//! Every decoded entry passes through [`normalize_path`] and
//! [`is_junk_path`]. Archive entries are additionally filtered by
//! [`is_allowed_text`] and may have a shared root folder removed by
//! [`unwrap_top_level`].

mod junk;
mod path;
mod text_policy;
mod unwrap;

pub use junk::is_junk_path;
pub use path::extension;
pub use path::normalize_path;
pub use text_policy::is_allowed_text;
pub use unwrap::common_root;
pub use unwrap::unwrap_top_level;
