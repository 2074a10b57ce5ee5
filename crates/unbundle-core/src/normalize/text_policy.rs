//! Text allow-list applied to archive entries.

use crate::config::TextExtensions;

use super::path::extension;

/// Returns `true` if an archive entry should be kept as text.
///
/// Only entries whose extension is in `allowed` survive. Entries without an
/// extension are rejected. Rejections are not junk and are never reported.
///
/// # Examples
///
/// ```
/// use unbundle_core::config::TextExtensions;
/// use unbundle_core::normalize::is_allowed_text;
///
/// let allowed = TextExtensions::default();
/// assert!(is_allowed_text("docs/intro.md", &allowed));
/// assert!(!is_allowed_text("bin/tool.exe", &allowed));
/// assert!(!is_allowed_text("LICENSE", &allowed));
/// ```
#[must_use]
pub fn is_allowed_text(path: &str, allowed: &TextExtensions) -> bool {
    extension(path).is_some_and(|ext| allowed.contains(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions_kept() {
        let allowed = TextExtensions::default();
        assert!(is_allowed_text("SKILL.md", &allowed));
        assert!(is_allowed_text("a/b/config.YAML", &allowed));
        assert!(is_allowed_text("scripts/run.sh", &allowed));
    }

    #[test]
    fn test_unknown_or_missing_extension_dropped() {
        let allowed = TextExtensions::default();
        assert!(!is_allowed_text("notes.bin", &allowed));
        assert!(!is_allowed_text("image.png", &allowed));
        assert!(!is_allowed_text("Makefile", &allowed));
        assert!(!is_allowed_text("dir/", &allowed));
        assert!(!is_allowed_text("", &allowed));
    }

    #[test]
    fn test_custom_allow_list() {
        let allowed: TextExtensions = ["bin"].into_iter().collect();
        assert!(is_allowed_text("notes.bin", &allowed));
        assert!(!is_allowed_text("notes.md", &allowed));
    }
}
