//! Expansion configuration.

use std::collections::HashSet;

/// File extensions recognized as importable text by default.
///
/// Entries are lower-case and carry no leading dot.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    "bash", "bat", "c", "cc", "cfg", "cjs", "conf", "cpp", "cs", "css", "csv", "dart", "diff",
    "editorconfig", "env", "erb", "ex", "exs", "fish", "gitignore", "go", "gql", "gradle",
    "graphql", "h", "hpp", "hs", "htm", "html", "ini", "java", "jl", "js", "json", "jsonc",
    "jsonl", "jsx", "kt", "kts", "less", "lua", "markdown", "md", "mdx", "mjs", "ml", "mts",
    "patch", "php", "pl", "properties", "proto", "ps1", "py", "r", "rb", "rs", "rst", "sass",
    "scala", "scss", "sh", "sql", "svelte", "svg", "swift", "tex", "toml", "ts", "tsv", "tsx",
    "txt", "vue", "xml", "yaml", "yml", "zsh",
];

/// Case-insensitive set of recognized text-file extensions.
///
/// Built once and never mutated while an expansion runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExtensions {
    extensions: HashSet<String>,
}

impl TextExtensions {
    /// Returns `true` if `extension` (without a leading dot) is recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbundle_core::config::TextExtensions;
    ///
    /// let set = TextExtensions::default();
    /// assert!(set.contains("md"));
    /// assert!(set.contains("YAML"));
    /// assert!(!set.contains("exe"));
    /// ```
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_ascii_lowercase())
    }

    /// Number of extensions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    fn insert(&mut self, extension: &str) {
        let ext = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        if !ext.is_empty() {
            self.extensions.insert(ext);
        }
    }
}

impl Default for TextExtensions {
    fn default() -> Self {
        DEFAULT_TEXT_EXTENSIONS.iter().copied().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TextExtensions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self {
            extensions: HashSet::new(),
        };
        for ext in iter {
            set.insert(ext.as_ref());
        }
        set
    }
}

/// Configuration for a bundle expansion.
///
/// # Examples
///
/// ```
/// use unbundle_core::ExpandConfig;
///
/// let config = ExpandConfig::default().with_extra_text_extensions(["tf", ".hcl"]);
/// assert!(config.text_extensions.contains("tf"));
/// assert!(config.text_extensions.contains("hcl"));
/// assert!(config.unwrap_top_level);
/// ```
#[derive(Debug, Clone)]
pub struct ExpandConfig {
    /// Extensions kept when filtering archive entries.
    pub text_extensions: TextExtensions,

    /// Strip a single root folder shared by every entry of an archive.
    pub unwrap_top_level: bool,
}

impl Default for ExpandConfig {
    /// Default values:
    /// - `text_extensions`: [`DEFAULT_TEXT_EXTENSIONS`]
    /// - `unwrap_top_level`: true
    fn default() -> Self {
        Self {
            text_extensions: TextExtensions::default(),
            unwrap_top_level: true,
        }
    }
}

impl ExpandConfig {
    /// Adds extensions to the recognized text set. A leading dot is ignored.
    #[must_use]
    pub fn with_extra_text_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in extensions {
            self.text_extensions.insert(ext.as_ref());
        }
        self
    }

    /// Enables or disables top-level folder unwrapping for archives.
    #[must_use]
    pub fn with_unwrap_top_level(mut self, unwrap: bool) -> Self {
        self.unwrap_top_level = unwrap;
        self
    }
}
