//! Output formatter trait for CLI results.

use anyhow::Result;
use filekit_core::ArchiveEntry;
use filekit_core::ArchiveReport;
use filekit_core::Checksums;
use filekit_core::CompressionReport;
use filekit_core::CopyOutcome;
use filekit_core::DownloadReport;
use filekit_core::ExtractionReport;
use filekit_core::FileInfo;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Everything the `info` command reports about one path.
pub struct InfoView<'a> {
    pub path: &'a Path,
    pub info: &'a FileInfo,
    pub link_target: Option<PathBuf>,
    pub same_as: Option<(&'a Path, bool)>,
}

/// Common output formatter trait
///
/// Status output (`format_success`) honors `--quiet`;
/// data a command was asked to produce is always printed.
pub trait OutputFormatter {
    /// Format a one-line confirmation for a command without other output
    fn format_success(&self, operation: &str, message: &str);

    /// Format error message
    fn format_error(&self, error: &anyhow::Error);

    /// Format file metadata
    fn format_file_info(&self, view: &InfoView<'_>) -> Result<()>;

    /// Format the outcome of a copy
    fn format_copy_result(&self, src: &Path, dst: &Path, outcome: CopyOutcome) -> Result<()>;

    /// Format a seek position
    fn format_position(&self, path: &Path, position: u64) -> Result<()>;

    /// Format raw file content
    fn format_content(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Format archive creation result
    fn format_archive_result(&self, output: &Path, report: &ArchiveReport) -> Result<()>;

    /// Format extraction result
    fn format_extraction_result(&self, target: &Path, report: &ExtractionReport) -> Result<()>;

    /// Format archive listing
    fn format_archive_listing(
        &self,
        entries: &[ArchiveEntry],
        long: bool,
        human_readable: bool,
    ) -> Result<()>;

    /// Format gzip or gunzip result
    fn format_compression_result(
        &self,
        operation: &str,
        dst: &Path,
        report: &CompressionReport,
    ) -> Result<()>;

    /// Format all four digests
    fn format_checksums(&self, path: &Path, sums: &Checksums) -> Result<()>;

    /// Format a lone MD5 digest
    fn format_md5(&self, path: &Path, md5: &str) -> Result<()>;

    /// Format download result
    fn format_download_result(&self, url: &str, path: &Path, report: &DownloadReport)
    -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}
