//! Input format detection by name suffix.

/// How an input item is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// ZIP archive (`.zip`).
    Zip,
    /// Gzip-compressed tar archive (`.tar.gz`, `.tgz`).
    TarGz,
    /// Single gzip-compressed file (`.gz`).
    Gzip,
    /// Anything else, passed through as one file.
    Loose,
}

impl InputKind {
    /// Returns `true` for multi-entry archives (ZIP and TAR).
    ///
    /// Only archive entries are subject to the text allow-list and the
    /// top-level unwrap.
    #[must_use]
    pub const fn is_archive(self) -> bool {
        matches!(self, Self::Zip | Self::TarGz)
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
            Self::Gzip => "gzip",
            Self::Loose => "file",
        }
    }
}

/// Detects the input kind from a name, case-insensitively.
///
/// # Examples
///
/// ```
/// use unbundle_core::formats::detect::InputKind;
/// use unbundle_core::formats::detect::detect_input_kind;
///
/// assert_eq!(detect_input_kind("skill.ZIP"), InputKind::Zip);
/// assert_eq!(detect_input_kind("skill.tar.gz"), InputKind::TarGz);
/// assert_eq!(detect_input_kind("notes.md.gz"), InputKind::Gzip);
/// assert_eq!(detect_input_kind("notes.md"), InputKind::Loose);
/// ```
#[must_use]
pub fn detect_input_kind(name: &str) -> InputKind {
    let lower = name.to_ascii_lowercase();

    if lower.ends_with(".zip") {
        InputKind::Zip
    } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
        InputKind::TarGz
    } else if lower.ends_with(".gz") {
        InputKind::Gzip
    } else {
        InputKind::Loose
    }
}

/// Derives the output name of a single `.gz` file by dropping the suffix.
///
/// # Examples
///
/// ```
/// use unbundle_core::formats::detect::gzip_output_name;
///
/// assert_eq!(gzip_output_name("notes.md.GZ"), "notes.md");
/// assert_eq!(gzip_output_name("plain"), "plain");
/// ```
#[must_use]
pub fn gzip_output_name(name: &str) -> &str {
    let split = name.len().saturating_sub(3);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(suffix)) if suffix.eq_ignore_ascii_case(".gz") => stem,
        _ => name,
    }
}
