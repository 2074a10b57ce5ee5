//! Extension-based MIME type inference.

use crate::config::TextExtensions;
use crate::normalize::extension;

/// Fallback for unknown or missing extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Fallback for recognized text extensions without a dedicated entry.
pub const TEXT_PLAIN: &str = "text/plain";

/// Fixed extension to MIME table. Keys are lower-case.
const MIME_TABLE: &[(&str, &str)] = &[
    ("md", "text/markdown"),
    ("markdown", "text/markdown"),
    ("mdx", "text/markdown"),
    ("txt", "text/plain"),
    ("json", "application/json"),
    ("jsonl", "application/jsonl"),
    ("yaml", "application/yaml"),
    ("yml", "application/yaml"),
    ("toml", "text/plain"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("cjs", "text/javascript"),
    ("ts", "text/plain"),
    ("tsx", "text/plain"),
    ("jsx", "text/plain"),
    ("py", "text/x-python"),
    ("sh", "text/x-shellscript"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("xml", "application/xml"),
    ("svg", "image/svg+xml"),
];

/// Returns the MIME type for a normalized path, judged by extension only.
///
/// The fixed table wins; otherwise an extension in `text_extensions` maps
/// to `text/plain`; everything else, including paths without an extension,
/// is `application/octet-stream`.
///
/// # Examples
///
/// ```
/// use unbundle_core::config::TextExtensions;
/// use unbundle_core::mime::content_type_for;
///
/// let text = TextExtensions::default();
/// assert_eq!(content_type_for("skill.md", &text), "text/markdown");
/// assert_eq!(content_type_for("main.rs", &text), "text/plain");
/// assert_eq!(content_type_for("logo.png", &text), "application/octet-stream");
/// assert_eq!(content_type_for("LICENSE", &text), "application/octet-stream");
/// ```
#[must_use]
pub fn content_type_for(path: &str, text_extensions: &TextExtensions) -> &'static str {
    let Some(ext) = extension(path) else {
        return OCTET_STREAM;
    };
    let ext = ext.to_ascii_lowercase();

    if let Some((_, mime)) = MIME_TABLE.iter().find(|(key, _)| *key == ext) {
        return *mime;
    }

    if text_extensions.contains(&ext) {
        TEXT_PLAIN
    } else {
        OCTET_STREAM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookups() {
        let text = TextExtensions::default();
        assert_eq!(content_type_for("SKILL.md", &text), "text/markdown");
        assert_eq!(content_type_for("data.JSON", &text), "application/json");
        assert_eq!(content_type_for("conf/app.yml", &text), "application/yaml");
        assert_eq!(content_type_for("Cargo.toml", &text), "text/plain");
        assert_eq!(content_type_for("icon.svg", &text), "image/svg+xml");
        assert_eq!(content_type_for("index.html", &text), "text/html");
    }

    #[test]
    fn test_text_fallback() {
        let text = TextExtensions::default();
        assert_eq!(content_type_for("lib.rs", &text), TEXT_PLAIN);
        assert_eq!(content_type_for("query.SQL", &text), TEXT_PLAIN);
    }

    #[test]
    fn test_octet_stream_fallback() {
        let text = TextExtensions::default();
        assert_eq!(content_type_for("notes.bin", &text), OCTET_STREAM);
        assert_eq!(content_type_for("Makefile", &text), OCTET_STREAM);
        assert_eq!(content_type_for("trailing.", &text), OCTET_STREAM);
        assert_eq!(content_type_for("", &text), OCTET_STREAM);
    }

    #[test]
    fn test_table_independent_of_text_set() {
        let empty: TextExtensions = Vec::<&str>::new().into_iter().collect();
        assert_eq!(content_type_for("a.md", &empty), "text/markdown");
        assert_eq!(content_type_for("a.rs", &empty), OCTET_STREAM);
    }

    #[test]
    fn test_table_keys_are_lowercase() {
        for (key, _) in MIME_TABLE {
            assert_eq!(*key, key.to_ascii_lowercase());
        }
    }
}
