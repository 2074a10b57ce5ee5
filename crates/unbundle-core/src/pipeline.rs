//! Entry normalization pipeline.
//!
//! Archive batches go through normalize, junk filter, text allow-list and
//! top-level unwrap. Single files (loose inputs and bare `.gz` payloads) only
//! go through normalize and the junk filter.

use crate::config::ExpandConfig;
use crate::mime::content_type_for;
use crate::normalize::is_allowed_text;
use crate::normalize::is_junk_path;
use crate::normalize::normalize_path;
use crate::normalize::unwrap_top_level;
use crate::report::ExpandFilesReport;
use crate::report::ExpandedFile;
use crate::types::RawEntry;

/// Archive entries that survived filtering, before unwrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredEntries {
    /// Normalized entries kept as text content.
    pub kept: Vec<RawEntry>,
    /// Normalized paths discarded as OS metadata.
    pub junk: Vec<String>,
}

/// Applies normalization and filtering to decoded entries.
#[derive(Debug, Clone, Copy)]
pub struct EntryPipeline<'a> {
    config: &'a ExpandConfig,
}

impl<'a> EntryPipeline<'a> {
    /// Creates a pipeline over the given configuration.
    #[must_use]
    pub fn new(config: &'a ExpandConfig) -> Self {
        Self { config }
    }

    /// Normalizes and filters an archive batch without unwrapping.
    ///
    /// Junk entries are reported; entries failing the text allow-list are
    /// dropped silently.
    #[must_use]
    pub fn filter_archive_entries(&self, raw: Vec<RawEntry>) -> FilteredEntries {
        let mut filtered = FilteredEntries::default();

        for entry in raw {
            let path = normalize_path(&entry.path);
            if is_junk_path(&path) {
                tracing::trace!(path = %path, "dropping os metadata entry");
                filtered.junk.push(path);
                continue;
            }
            if !is_allowed_text(&path, &self.config.text_extensions) {
                tracing::trace!(path = %path, "dropping non-text archive entry");
                continue;
            }
            filtered.kept.push(RawEntry::new(path, entry.data));
        }

        filtered
    }

    /// Runs the full archive pipeline and assigns MIME types.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbundle_core::ExpandConfig;
    /// use unbundle_core::RawEntry;
    /// use unbundle_core::pipeline::EntryPipeline;
    ///
    /// let config = ExpandConfig::default();
    /// let report = EntryPipeline::new(&config).process_archive(vec![
    ///     RawEntry::new("repo-main/SKILL.md", b"# Demo".to_vec()),
    ///     RawEntry::new("repo-main/.DS_Store", Vec::new()),
    /// ]);
    /// assert_eq!(report.files[0].path, "SKILL.md");
    /// assert_eq!(report.ignored_mac_junk_paths, ["repo-main/.DS_Store"]);
    /// ```
    #[must_use]
    pub fn process_archive(&self, raw: Vec<RawEntry>) -> ExpandFilesReport {
        let FilteredEntries { mut kept, junk } = self.filter_archive_entries(raw);

        if self.config.unwrap_top_level
            && let Some(root) = unwrap_top_level(&mut kept)
        {
            tracing::debug!(root = %root, entries = kept.len(), "unwrapped top-level folder");
        }

        ExpandFilesReport {
            files: kept.into_iter().map(|e| self.to_file(e)).collect(),
            ignored_mac_junk_paths: junk,
        }
    }

    /// Normalizes and junk-filters a single file.
    ///
    /// The text allow-list does not apply: a loose `notes.bin` is kept.
    #[must_use]
    pub fn process_single(&self, path: &str, data: Vec<u8>) -> ExpandFilesReport {
        let path = normalize_path(path);
        let mut report = ExpandFilesReport::new();

        if is_junk_path(&path) {
            tracing::trace!(path = %path, "dropping os metadata file");
            report.ignored_mac_junk_paths.push(path);
        } else {
            report.files.push(self.to_file(RawEntry::new(path, data)));
        }

        report
    }

    fn to_file(&self, entry: RawEntry) -> ExpandedFile {
        let mime_type = content_type_for(&entry.path, &self.config.text_extensions).to_string();
        ExpandedFile {
            path: entry.path,
            content: entry.data,
            mime_type,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, &[u8])]) -> Vec<RawEntry> {
        entries
            .iter()
            .map(|(p, d)| RawEntry::new(*p, d.to_vec()))
            .collect()
    }

    fn file_paths(report: &ExpandFilesReport) -> Vec<&str> {
        report.files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_junk_filtering_before_unwrap() {
        let config = ExpandConfig::default();
        let filtered = EntryPipeline::new(&config).filter_archive_entries(raw(&[
            ("a/SKILL.md", b"# Demo"),
            ("a/notes.md", b"notes"),
            ("a/.DS_Store", b"junk"),
            ("a/._notes.md", b"junk"),
            ("__MACOSX/._SKILL.md", b"junk"),
        ]));

        let kept: Vec<_> = filtered.kept.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(kept, ["a/SKILL.md", "a/notes.md"]);
        assert_eq!(
            filtered.junk,
            ["a/.DS_Store", "a/._notes.md", "__MACOSX/._SKILL.md"]
        );
    }

    #[test]
    fn test_archive_unwraps_after_junk_removal() {
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config).process_archive(raw(&[
            ("a/SKILL.md", b"# Demo"),
            ("a/notes.md", b"notes"),
            ("__MACOSX/._SKILL.md", b"junk"),
        ]));
        assert_eq!(file_paths(&report), ["SKILL.md", "notes.md"]);
        assert_eq!(report.files[0].mime_type, "text/markdown");
        assert_eq!(report.files[0].content, b"# Demo");
    }

    #[test]
    fn test_text_policy_drops_silently() {
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config).process_archive(raw(&[
            ("notes.bin", b"\x00\x01"),
            ("LICENSE", b"MIT"),
            ("README.md", b"# Readme"),
        ]));
        assert_eq!(file_paths(&report), ["README.md"]);
        assert!(report.ignored_mac_junk_paths.is_empty());
    }

    #[test]
    fn test_text_policy_runs_before_unwrap() {
        // The root-level LICENSE is dropped first, so the batch unwraps.
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config)
            .process_archive(raw(&[("LICENSE", b"MIT"), ("pkg/a.md", b"a")]));
        assert_eq!(file_paths(&report), ["a.md"]);
    }

    #[test]
    fn test_unwrap_can_be_disabled() {
        let config = ExpandConfig::default().with_unwrap_top_level(false);
        let report = EntryPipeline::new(&config)
            .process_archive(raw(&[("root/a.txt", b"a"), ("root/sub/b.txt", b"b")]));
        assert_eq!(file_paths(&report), ["root/a.txt", "root/sub/b.txt"]);
    }

    #[test]
    fn test_archive_paths_normalized() {
        let config = ExpandConfig::default().with_unwrap_top_level(false);
        let report = EntryPipeline::new(&config)
            .process_archive(raw(&[("./docs\\a.md", b"a"), ("/b.md\0", b"b")]));
        assert_eq!(file_paths(&report), ["docs/a.md", "b.md"]);
    }

    #[test]
    fn test_duplicates_pass_through() {
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config)
            .process_archive(raw(&[("a.md", b"one"), ("./a.md", b"two")]));
        assert_eq!(file_paths(&report), ["a.md", "a.md"]);
        assert_eq!(report.files[1].content, b"two");
    }

    #[test]
    fn test_single_file_keeps_non_text() {
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config).process_single("notes.bin", b"\xff".to_vec());
        assert_eq!(file_paths(&report), ["notes.bin"]);
        assert_eq!(report.files[0].mime_type, "application/octet-stream");
    }

    #[test]
    fn test_single_file_junk_reported() {
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config).process_single("/dir/.DS_Store", Vec::new());
        assert!(report.files.is_empty());
        assert_eq!(report.ignored_mac_junk_paths, ["dir/.DS_Store"]);
    }

    #[test]
    fn test_single_file_never_unwrapped() {
        let config = ExpandConfig::default();
        let report = EntryPipeline::new(&config).process_single("folder/a.md", b"a".to_vec());
        assert_eq!(file_paths(&report), ["folder/a.md"]);
    }
}
