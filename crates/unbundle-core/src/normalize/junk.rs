//! Operating-system metadata detection.

/// Folder that macOS Archive Utility adds to hold resource forks.
const MACOSX_DIR: &str = "__macosx";

/// Finder folder-view metadata file.
const DS_STORE: &str = ".ds_store";

/// Prefix of AppleDouble resource-fork shadow files.
const APPLE_DOUBLE_PREFIX: &str = "._";

/// Returns `true` if a normalized path is operating-system metadata.
///
/// Matching is case-insensitive on `/`-separated segments: any segment equal
/// to `__MACOSX`, a final segment equal to `.DS_Store`, or a final segment
/// starting with `._`.
///
/// # Examples
///
/// ```
/// use unbundle_core::normalize::is_junk_path;
///
/// assert!(is_junk_path("__MACOSX/._SKILL.md"));
/// assert!(is_junk_path("a/.DS_Store"));
/// assert!(is_junk_path("a/._notes.md"));
/// assert!(!is_junk_path("a/notes.md"));
/// ```
#[must_use]
pub fn is_junk_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    let mut segments = lower.split('/').peekable();

    while let Some(segment) = segments.next() {
        if segment == MACOSX_DIR {
            return true;
        }
        if segments.peek().is_none() {
            return segment == DS_STORE || segment.starts_with(APPLE_DOUBLE_PREFIX);
        }
    }

    false
}
