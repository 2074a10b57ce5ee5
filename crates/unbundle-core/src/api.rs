//! High-level expansion API.

use crate::ExpandConfig;
use crate::ExpandError;
use crate::ExpandFilesReport;
use crate::Result;
use crate::collect::DropItem;
use crate::collect::EntryHandle;
use crate::collect::collect_drop;
use crate::formats::ArchiveDecoder;
use crate::formats::GzipDecoder;
use crate::formats::StreamDecoder;
use crate::formats::TarDecoder;
use crate::formats::ZipDecoder;
use crate::formats::detect::InputKind;
use crate::formats::detect::detect_input_kind;
use crate::formats::detect::gzip_output_name;
use crate::pipeline::EntryPipeline;
use crate::types::FileBlob;

/// Dispatches inputs to decoders and merges their normalized output.
///
/// The ZIP and GZIP primitives are pluggable so the pipeline can run against
/// synthetic decoders; [`Expander::new`] uses the `zip` and `flate2` backed
/// ones.
#[derive(Debug, Clone)]
pub struct Expander<'a, Z = ZipDecoder, G = GzipDecoder> {
    config: &'a ExpandConfig,
    zip: Z,
    gzip: G,
    tar: TarDecoder,
}

impl<'a> Expander<'a> {
    /// Creates an expander with the default decoders.
    #[must_use]
    pub fn new(config: &'a ExpandConfig) -> Self {
        Self::with_decoders(config, ZipDecoder::new(), GzipDecoder::new())
    }
}

impl<'a, Z: ArchiveDecoder, G: StreamDecoder> Expander<'a, Z, G> {
    /// Creates an expander with custom ZIP and GZIP primitives.
    #[must_use]
    pub fn with_decoders(config: &'a ExpandConfig, zip: Z, gzip: G) -> Self {
        Self {
            config,
            zip,
            gzip,
            tar: TarDecoder::new(),
        }
    }

    /// Expands one in-memory item.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::Decode`] if the ZIP or GZIP primitive rejects
    /// the buffer.
    pub fn expand_item(&self, name: &str, data: Vec<u8>) -> Result<ExpandFilesReport> {
        let kind = detect_input_kind(name);
        let pipeline = EntryPipeline::new(self.config);

        let report = match kind {
            InputKind::Zip => {
                let entries = self
                    .zip
                    .decode(&data)
                    .map_err(|source| decode_error(name, self.zip.format_name(), source))?;
                pipeline.process_archive(entries)
            }
            InputKind::TarGz => {
                let tar = self.gunzip(name, &data)?;
                pipeline.process_archive(self.tar.decode_entries(&tar))
            }
            InputKind::Gzip => {
                let payload = self.gunzip(name, &data)?;
                pipeline.process_single(gzip_output_name(name), payload)
            }
            InputKind::Loose => pipeline.process_single(name, data),
        };

        tracing::debug!(
            item = name,
            kind = kind.name(),
            files = report.files.len(),
            junk = report.ignored_mac_junk_paths.len(),
            "expanded input"
        );

        Ok(report)
    }

    /// Reads and expands every input in order.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable input or rejected archive; no partial
    /// report is returned.
    pub async fn expand_files<F: FileBlob>(&self, inputs: &[F]) -> Result<ExpandFilesReport> {
        let mut report = ExpandFilesReport::new();

        for input in inputs {
            let data = input.read_bytes().await?;
            report.merge(self.expand_item(input.name(), data)?);
        }

        Ok(report)
    }

    /// Collects a drop into files with relative paths, then expands them.
    ///
    /// # Errors
    ///
    /// Fails if a directory cannot be listed, a file cannot be read, or an
    /// archive is rejected.
    pub async fn expand_drop<E: EntryHandle>(
        &self,
        items: Vec<DropItem<E>>,
    ) -> Result<ExpandFilesReport> {
        let files = collect_drop(items).await?;
        tracing::debug!(files = files.len(), "collected dropped items");
        self.expand_files(&files).await
    }

    fn gunzip(&self, name: &str, data: &[u8]) -> Result<Vec<u8>> {
        self.gzip
            .decode(data)
            .map_err(|source| decode_error(name, self.gzip.format_name(), source))
    }
}

fn decode_error(name: &str, format: &'static str, source: crate::DecodeError) -> ExpandError {
    ExpandError::Decode {
        name: name.to_string(),
        format,
        source,
    }
}

/// Expands a sequence of named inputs into a single report.
///
/// # Examples
///
/// ```
/// use unbundle_core::ExpandConfig;
/// use unbundle_core::MemoryFile;
/// use unbundle_core::expand_files;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let rt = tokio::runtime::Builder::new_current_thread().build()?;
/// # rt.block_on(async {
/// let inputs = vec![
///     MemoryFile::new("SKILL.md", b"# Demo".to_vec()),
///     MemoryFile::new(".DS_Store", Vec::new()),
/// ];
/// let report = expand_files(&inputs, &ExpandConfig::default()).await?;
/// assert_eq!(report.files.len(), 1);
/// assert_eq!(report.ignored_mac_junk_paths, [".DS_Store"]);
/// # Ok::<_, unbundle_core::ExpandError>(())
/// # })?;
/// # Ok(())
/// # }
/// ```
pub async fn expand_files<F: FileBlob>(
    inputs: &[F],
    config: &ExpandConfig,
) -> Result<ExpandFilesReport> {
    Expander::new(config).expand_files(inputs).await
}

/// Expands a drag-and-drop item collection into a single report.
pub async fn expand_drop<E: EntryHandle>(
    items: Vec<DropItem<E>>,
    config: &ExpandConfig,
) -> Result<ExpandFilesReport> {
    Expander::new(config).expand_drop(items).await
}

/// Expands one in-memory item synchronously.
///
/// # Examples
///
/// ```
/// use unbundle_core::ExpandConfig;
/// use unbundle_core::expand_bytes;
///
/// let report = expand_bytes("notes.bin", vec![0xff], &ExpandConfig::default()).unwrap();
/// assert_eq!(report.files[0].mime_type, "application/octet-stream");
/// ```
pub fn expand_bytes(name: &str, data: Vec<u8>, config: &ExpandConfig) -> Result<ExpandFilesReport> {
    Expander::new(config).expand_item(name, data)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::DecodeError;
    use crate::RawEntry;
    use crate::test_utils::TarTestBuilder;
    use crate::test_utils::create_test_zip;
    use crate::test_utils::gzip_bytes;
    use crate::types::MemoryFile;

    fn paths(report: &ExpandFilesReport) -> Vec<&str> {
        report.files.iter().map(|f| f.path.as_str()).collect()
    }

    struct StubZip(Vec<(&'static str, &'static [u8])>);

    impl ArchiveDecoder for StubZip {
        fn decode(&self, _data: &[u8]) -> std::result::Result<Vec<RawEntry>, DecodeError> {
            Ok(self
                .0
                .iter()
                .map(|(p, d)| RawEntry::new(*p, d.to_vec()))
                .collect())
        }

        fn format_name(&self) -> &'static str {
            "stub-zip"
        }
    }

    struct FailingGzip;

    impl StreamDecoder for FailingGzip {
        fn decode(&self, _data: &[u8]) -> std::result::Result<Vec<u8>, DecodeError> {
            Err(DecodeError::Malformed("bad magic".into()))
        }

        fn format_name(&self) -> &'static str {
            "stub-gzip"
        }
    }

    #[test]
    fn test_zip_branch_filters_and_unwraps() {
        let config = ExpandConfig::default();
        let data = create_test_zip(vec![
            ("a/SKILL.md", b"# Demo"),
            ("a/notes.md", b"notes"),
            ("a/.DS_Store", b"junk"),
            ("a/._notes.md", b"junk"),
            ("__MACOSX/._SKILL.md", b"junk"),
        ]);

        let report = expand_bytes("bundle.zip", data, &config).unwrap();
        assert_eq!(paths(&report), ["SKILL.md", "notes.md"]);
        assert_eq!(report.ignored_mac_junk_paths.len(), 3);
    }

    #[test]
    fn test_tar_gz_branch() {
        let config = ExpandConfig::default();
        let tar = TarTestBuilder::new()
            .add_directory("pkg/")
            .add_file("pkg/SKILL.md", b"# Skill")
            .add_file("pkg/img.png", b"\x89PNG")
            .build();

        for name in ["bundle.tar.gz", "BUNDLE.TGZ"] {
            let report = expand_bytes(name, gzip_bytes(&tar), &config).unwrap();
            assert_eq!(paths(&report), ["SKILL.md"]);
            assert_eq!(report.files[0].content, b"# Skill");
        }
    }

    #[test]
    fn test_bare_gzip_branch() {
        let config = ExpandConfig::default();
        let report = expand_bytes("dir/data.bin.gz", gzip_bytes(b"\x00\x01"), &config).unwrap();
        assert_eq!(paths(&report), ["dir/data.bin"]);
        assert_eq!(report.files[0].content, b"\x00\x01");
        assert_eq!(report.files[0].mime_type, "application/octet-stream");
    }

    #[test]
    fn test_bare_gzip_junk_name() {
        let config = ExpandConfig::default();
        let report = expand_bytes("._notes.md.gz", gzip_bytes(b"x"), &config).unwrap();
        assert!(report.files.is_empty());
        assert_eq!(report.ignored_mac_junk_paths, ["._notes.md"]);
    }

    #[test]
    fn test_loose_branch_keeps_non_text() {
        let config = ExpandConfig::default();
        let report = expand_bytes("notes.bin", b"raw".to_vec(), &config).unwrap();
        assert_eq!(paths(&report), ["notes.bin"]);
    }

    #[test]
    fn test_malformed_zip_fails() {
        let config = ExpandConfig::default();
        let err = expand_bytes("broken.zip", b"nope".to_vec(), &config).unwrap_err();
        assert!(err.is_decode_error());
        assert_eq!(err.item_name(), Some("broken.zip"));
    }

    #[test]
    fn test_malformed_gzip_fails() {
        let config = ExpandConfig::default();
        let err = expand_bytes("broken.tgz", b"nope".to_vec(), &config).unwrap_err();
        assert!(matches!(err, ExpandError::Decode { format: "gzip", .. }));
    }

    #[test]
    fn test_custom_decoders() {
        let config = ExpandConfig::default();
        let expander = Expander::with_decoders(
            &config,
            StubZip(vec![("x/a.md", b"a"), ("x/b.exe", b"b")]),
            FailingGzip,
        );

        let report = expander.expand_item("any.zip", Vec::new()).unwrap();
        assert_eq!(paths(&report), ["a.md"]);

        let err = expander.expand_item("any.gz", Vec::new()).unwrap_err();
        assert!(matches!(err, ExpandError::Decode { format: "stub-gzip", .. }));
    }

    #[tokio::test]
    async fn test_expand_files_preserves_input_order() {
        let config = ExpandConfig::default();
        let inputs = vec![
            MemoryFile::new("z.md", b"z".to_vec()),
            MemoryFile::new("pack.zip", create_test_zip(vec![("b.md", b"b"), ("a.md", b"a")])),
            MemoryFile::new(".DS_Store", Vec::new()),
            MemoryFile::new("c.md", b"c".to_vec()),
        ];

        let report = expand_files(&inputs, &config).await.unwrap();
        assert_eq!(paths(&report), ["z.md", "b.md", "a.md", "c.md"]);
        assert_eq!(report.ignored_mac_junk_paths, [".DS_Store"]);
    }

    #[tokio::test]
    async fn test_expand_files_aborts_on_bad_archive() {
        let config = ExpandConfig::default();
        let inputs = vec![
            MemoryFile::new("ok.md", b"ok".to_vec()),
            MemoryFile::new("bad.zip", b"bad".to_vec()),
        ];
        assert!(expand_files(&inputs, &config).await.is_err());
    }
}
