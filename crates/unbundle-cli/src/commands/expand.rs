//! Expand command implementation.

use crate::cli::ExpandArgs;
use crate::error::add_expand_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use std::path::Path;
use std::path::PathBuf;
use unbundle_core::DropItem;
use unbundle_core::EntryHandle;
use unbundle_core::ExpandConfig;
use unbundle_core::ExpandFilesReport;
use unbundle_core::collect::EntryKind;
use unbundle_core::collect::FsEntry;
use unbundle_core::expand_drop;

pub async fn execute(args: &ExpandArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = ExpandConfig::default()
        .with_extra_text_extensions(&args.text_ext)
        .with_unwrap_top_level(!args.no_unwrap);

    let mut items = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let entry = FsEntry::from_path(input)
            .await
            .with_context(|| format!("Failed to open input '{}'", input.display()))?;

        if entry.kind() == EntryKind::Other {
            formatter.format_warning(&format!(
                "Skipping '{}': not a regular file or directory",
                input.display()
            ));
            continue;
        }
        items.push(DropItem::Entry(entry));
    }

    let report = add_expand_context(expand_drop(items, &config).await)?;
    tracing::debug!(
        files = report.file_count(),
        bytes = report.total_bytes(),
        junk = report.ignored_mac_junk_paths.len(),
        "expansion finished"
    );

    if let Some(dir) = &args.output_dir {
        write_files(&report, dir).await?;
    }

    formatter.format_expand_result(&report, args.output_dir.as_deref())?;

    Ok(())
}

/// Writes every file beneath `dir`, refusing any path that could leave it.
///
/// All targets are resolved before the first write, so a rejected path
/// leaves the directory untouched.
async fn write_files(report: &ExpandFilesReport, dir: &Path) -> Result<()> {
    let targets = report
        .files
        .iter()
        .map(|file| output_path(dir, &file.path))
        .collect::<Result<Vec<_>>>()?;

    for (file, target) in report.files.iter().zip(&targets) {
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }
        tokio::fs::write(target, &file.content)
            .await
            .with_context(|| format!("Failed to write '{}'", target.display()))?;
    }

    Ok(())
}

/// Joins a normalized report path onto `dir`.
fn output_path(dir: &Path, path: &str) -> Result<PathBuf> {
    if path.split('/').any(|segment| segment == "..") {
        bail!(
            "Refusing to write '{path}' outside the output directory\n\
             HINT: The input contains a '..' path segment."
        );
    }

    let target = path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .fold(dir.to_path_buf(), |acc, segment| acc.join(segment));

    if target == dir {
        bail!("Refusing to write a file with an empty path");
    }

    Ok(target)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unbundle_core::ExpandedFile;

    fn report(paths: &[&str]) -> ExpandFilesReport {
        ExpandFilesReport {
            files: paths
                .iter()
                .map(|p| ExpandedFile {
                    path: (*p).to_string(),
                    content: p.as_bytes().to_vec(),
                    mime_type: "text/plain".to_string(),
                })
                .collect(),
            ignored_mac_junk_paths: Vec::new(),
        }
    }

    #[test]
    fn test_output_path_joins_segments() {
        let dir = Path::new("out");
        assert_eq!(
            output_path(dir, "docs/guide.md").unwrap(),
            Path::new("out").join("docs").join("guide.md")
        );
        assert_eq!(
            output_path(dir, "a//b.md").unwrap(),
            Path::new("out").join("a").join("b.md")
        );
    }

    #[test]
    fn test_output_path_rejects_parent_segments() {
        let dir = Path::new("out");
        assert!(output_path(dir, "../escape.md").is_err());
        assert!(output_path(dir, "a/../../b.md").is_err());
        assert!(output_path(dir, "").is_err());
        assert!(output_path(dir, "..hidden.md").is_ok());
    }

    #[tokio::test]
    async fn test_write_files_creates_parents() {
        let temp = TempDir::new().unwrap();
        write_files(&report(&["SKILL.md", "docs/deep/guide.md"]), temp.path())
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(temp.path().join("docs/deep/guide.md")).unwrap(),
            b"docs/deep/guide.md"
        );
        assert!(temp.path().join("SKILL.md").is_file());
    }

    #[tokio::test]
    async fn test_write_files_all_or_nothing() {
        let temp = TempDir::new().unwrap();
        let result = write_files(&report(&["ok.md", "../bad.md"]), temp.path()).await;

        assert!(result.is_err());
        assert!(!temp.path().join("ok.md").exists());
    }
}
