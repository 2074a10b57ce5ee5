//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use unbundle_core::ExpandFilesReport;

pub struct JsonFormatter;

/// One expanded file; content is omitted, its size is reported instead.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileOutput<'a> {
    path: &'a str,
    mime_type: &'a str,
    size: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpandOutput<'a> {
    files: Vec<FileOutput<'a>>,
    ignored_mac_junk_paths: &'a [String],
    file_count: usize,
    total_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
}

impl<'a> ExpandOutput<'a> {
    fn new(report: &'a ExpandFilesReport, output_dir: Option<&Path>) -> Self {
        Self {
            files: report
                .files
                .iter()
                .map(|f| FileOutput {
                    path: &f.path,
                    mime_type: &f.mime_type,
                    size: f.size(),
                })
                .collect(),
            ignored_mac_junk_paths: &report.ignored_mac_junk_paths,
            file_count: report.file_count(),
            total_bytes: report.total_bytes(),
            output_dir: output_dir.map(|d| d.display().to_string()),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_expand_result(
        &self,
        report: &ExpandFilesReport,
        output_dir: Option<&Path>,
    ) -> Result<()> {
        let output = JsonOutput::success("expand", ExpandOutput::new(report, output_dir));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("expand", format!("{error:#}"));
        let _ = Self::output(&output);
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::warning(
            "expand",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
