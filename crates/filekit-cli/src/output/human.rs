//! Human-readable output formatter with colors and styling.

use super::formatter::InfoView;
use super::formatter::OutputFormatter;
use crate::progress::humanize_bytes;
use anyhow::Result;
use console::Term;
use console::style;
use filekit_core::ArchiveEntry;
use filekit_core::ArchiveReport;
use filekit_core::Checksums;
use filekit_core::CompressionReport;
use filekit_core::CopyOutcome;
use filekit_core::DownloadReport;
use filekit_core::ExtractionReport;
use std::io::Write;
use std::path::Path;

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

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn headline(&self, text: &str) {
        if self.use_colors {
            self.line(&format!("{} {text}", style("✓").green().bold()));
        } else {
            self.line(text);
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_success(&self, _operation: &str, message: &str) {
        if self.quiet {
            return;
        }
        self.headline(message);
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_file_info(&self, view: &InfoView<'_>) -> Result<()> {
        let info = view.info;
        let kind = if info.is_symlink {
            "symbolic link"
        } else if info.is_dir {
            "directory"
        } else if info.is_file {
            "regular file"
        } else {
            "special file"
        };

        self.line(&format!("  File: {}", view.path.display()));
        if let Some(target) = &view.link_target {
            self.line(&format!("  Link: -> {}", target.display()));
        }
        self.line(&format!("  Type: {kind}"));
        self.line(&format!(
            "  Size: {} ({})",
            info.size,
            humanize_bytes(info.size)
        ));
        self.line(&format!("  Mode: {} ({:04o})", info.mode_string(), info.mode));
        self.line(&format!(
            "  Modified: {}",
            humantime::format_rfc3339_seconds(info.modified)
        ));

        if self.verbose {
            if let (Some(dev), Some(ino)) = (info.dev, info.ino) {
                self.line(&format!("  Device: {dev}  Inode: {ino}"));
            }
            if let Some(nlink) = info.nlink {
                self.line(&format!("  Links: {nlink}"));
            }
            if let (Some(uid), Some(gid)) = (info.uid, info.gid) {
                self.line(&format!("  Owner: {uid}:{gid}"));
            }
        }

        if let Some((other, same)) = view.same_as {
            let answer = if same { "yes" } else { "no" };
            self.line(&format!("  Same file as {}: {answer}", other.display()));
        }

        Ok(())
    }

    fn format_copy_result(&self, src: &Path, dst: &Path, outcome: CopyOutcome) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let detail = match outcome {
            CopyOutcome::AlreadySame => "already the same file, nothing to do".to_string(),
            CopyOutcome::HardLinked => "hard-linked".to_string(),
            CopyOutcome::Copied { bytes } => format!("copied {}", humanize_bytes(bytes)),
        };
        self.headline(&format!(
            "{} -> {}: {detail}",
            src.display(),
            dst.display()
        ));
        Ok(())
    }

    fn format_position(&self, _path: &Path, position: u64) -> Result<()> {
        self.line(&position.to_string());
        Ok(())
    }

    fn format_content(&self, _path: &Path, content: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
        Ok(())
    }

    fn format_archive_result(&self, output: &Path, report: &ArchiveReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Archive created: {}", output.display()));
        self.line("");
        self.line(&format!(
            "  Files added:      {}",
            Self::format_number(report.files_added)
        ));
        self.line(&format!(
            "  Total size:       {}",
            humanize_bytes(report.bytes_written)
        ));
        self.line(&format!(
            "  Archive size:     {}",
            humanize_bytes(report.archive_size)
        ));

        if self.verbose {
            self.line(&format!(
                "  Ratio:            {:.2}",
                report.compression_ratio()
            ));
            self.line(&format!("  Duration:         {:?}", report.duration));
        }

        Ok(())
    }

    fn format_extraction_result(&self, target: &Path, report: &ExtractionReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Extraction complete: {}", target.display()));
        self.line(&format!("  Files extracted: {}", report.files_extracted));
        self.line(&format!("  Directories: {}", report.directories_created));
        self.line(&format!(
            "  Total size: {}",
            humanize_bytes(report.bytes_written)
        ));

        if self.verbose {
            self.line(&format!("  Duration: {:?}", report.duration));
        }

        Ok(())
    }

    fn format_archive_listing(
        &self,
        entries: &[ArchiveEntry],
        long: bool,
        human_readable: bool,
    ) -> Result<()> {
        if !long {
            for entry in entries {
                self.line(&entry.name);
            }
            return Ok(());
        }

        let mut total_size = 0u64;
        for entry in entries {
            total_size += entry.size;
            let size_str = if human_readable {
                humanize_bytes(entry.size)
            } else {
                entry.size.to_string()
            };
            let mode_str = entry
                .mode
                .map_or_else(|| "-".to_string(), |m| format!("{m:o}"));
            let type_char = if entry.is_dir { "d" } else { "-" };

            self.line(&format!(
                "{type_char}{mode_str:<6} {size_str:>10}  {}",
                entry.name
            ));
        }

        self.line("");
        self.line(&format!(
            "Total: {} entries, {}",
            Self::format_number(entries.len()),
            humanize_bytes(total_size)
        ));

        Ok(())
    }

    fn format_compression_result(
        &self,
        operation: &str,
        dst: &Path,
        report: &CompressionReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let verb = if operation == "gzip" {
            "Compressed"
        } else {
            "Decompressed"
        };
        self.headline(&format!(
            "{verb} to {}: {} -> {} ({:.1}% smaller)",
            dst.display(),
            humanize_bytes(report.bytes_in),
            humanize_bytes(report.bytes_out),
            report.savings_percentage()
        ));
        Ok(())
    }

    fn format_checksums(&self, path: &Path, sums: &Checksums) -> Result<()> {
        self.line(&format!("{}", path.display()));
        self.line(&format!("  MD5:    {}", sums.md5));
        self.line(&format!("  SHA1:   {}", sums.sha1));
        self.line(&format!("  SHA256: {}", sums.sha256));
        self.line(&format!("  SHA512: {}", sums.sha512));
        Ok(())
    }

    fn format_md5(&self, path: &Path, md5: &str) -> Result<()> {
        self.line(&format!("{md5}  {}", path.display()));
        Ok(())
    }

    fn format_download_result(
        &self,
        url: &str,
        path: &Path,
        report: &DownloadReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.headline(&format!("Downloaded {url}"));
        self.line(&format!("  Saved to: {}", path.display()));
        self.line(&format!(
            "  Size: {}",
            humanize_bytes(report.bytes_written)
        ));
        if self.verbose {
            self.line(&format!("  Status: {}", report.status));
            if let Some(len) = report.content_length {
                self.line(&format!("  Content-Length: {len}"));
            }
            self.line(&format!(
                "  Duration: {}",
                humantime::format_duration(report.duration)
            ));
        }
        Ok(())
    }
}
