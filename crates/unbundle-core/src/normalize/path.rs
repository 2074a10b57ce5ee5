//! Path canonicalization.

/// Canonicalizes a raw entry path.
///
/// Removes NUL characters, converts backslashes to forward slashes, trims
/// surrounding whitespace, then strips every leading `./` and every leading
/// `/`. Never fails; the empty string is a valid result.
///
/// Normalizing an already-normalized path returns it unchanged.
///
/// # Examples
///
/// ```
/// use unbundle_core::normalize::normalize_path;
///
/// assert_eq!(normalize_path("./skills\\demo/SKILL.md"), "skills/demo/SKILL.md");
/// assert_eq!(normalize_path("  /etc/notes.txt\0 "), "etc/notes.txt");
/// assert_eq!(normalize_path("././//./a.md"), "a.md");
/// ```
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != '\0')
        .map(|c| if c == '\\' { '/' } else { c })
        .collect();

    let mut rest = cleaned.trim();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }

    // Stripping may expose whitespace that a second pass would trim.
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        rest.to_string()
    } else {
        normalize_path(trimmed)
    }
}

/// Returns the extension of the final path segment, without the dot.
///
/// The extension is the substring after the last `.` of the file name. A
/// name ending in `.` has no extension.
///
/// # Examples
///
/// ```
/// use unbundle_core::normalize::extension;
///
/// assert_eq!(extension("docs/guide.MD"), Some("MD"));
/// assert_eq!(extension(".gitignore"), Some("gitignore"));
/// assert_eq!(extension("v1.2/README"), None);
/// assert_eq!(extension("archive."), None);
/// ```
#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}
