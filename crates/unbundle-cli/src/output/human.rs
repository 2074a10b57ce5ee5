//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use unbundle_core::ExpandFilesReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (i, c) in s.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push(',');
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }

    /// One `mime  size  path` row.
    fn format_row(mime_type: &str, size: usize, path: &str) -> String {
        format!("{mime_type:<24} {size:>10}  {path}")
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_expand_result(
        &self,
        report: &ExpandFilesReport,
        output_dir: Option<&Path>,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for file in &report.files {
            self.term
                .write_line(&Self::format_row(&file.mime_type, file.size(), &file.path))?;
        }

        if report.has_ignored_junk() {
            self.term.write_line("")?;
            let header = format!(
                "Ignored macOS metadata ({}):",
                Self::format_number(report.ignored_mac_junk_paths.len())
            );
            if self.use_colors {
                self.term
                    .write_line(&format!("{}", style(header).yellow().bold()))?;
            } else {
                self.term.write_line(&header)?;
            }
            for path in &report.ignored_mac_junk_paths {
                self.term.write_line(&format!("  {path}"))?;
            }
        }

        self.term.write_line("")?;
        let summary = format!(
            "Expanded {} files ({})",
            Self::format_number(report.file_count()),
            Self::format_size(report.total_bytes())
        );
        if self.use_colors {
            self.term
                .write_line(&format!("{} {summary}", style("✓").green().bold()))?;
        } else {
            self.term.write_line(&summary)?;
        }

        if let Some(dir) = output_dir {
            self.term
                .write_line(&format!("  Written to: {}", dir.display()))?;
        } else if self.verbose {
            self.term
                .write_line("  No --output-dir given; nothing was written")?;
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:#}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:#}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = term.write_line(&format!("WARNING: {message}"));
        }
    }
}
