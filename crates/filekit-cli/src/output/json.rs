//! JSON output formatter for machine-readable results.

use super::formatter::InfoView;
use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use filekit_core::ArchiveEntry;
use filekit_core::ArchiveReport;
use filekit_core::Checksums;
use filekit_core::CompressionReport;
use filekit_core::CopyOutcome;
use filekit_core::DownloadReport;
use filekit_core::ExtractionReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::time::UNIX_EPOCH;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct MessageData {
    message: String,
}

#[derive(Serialize)]
struct EntryOutput<'a> {
    name: &'a str,
    size: u64,
    compressed_size: u64,
    is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<u32>,
}

impl OutputFormatter for JsonFormatter {
    fn format_success(&self, operation: &str, message: &str) {
        let output = JsonOutput::success(
            operation,
            MessageData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("error", format!("{error:?}"));
        let _ = Self::output(&output);
    }

    fn format_file_info(&self, view: &InfoView<'_>) -> Result<()> {
        #[derive(Serialize)]
        struct InfoOutput {
            path: String,
            name: String,
            size: u64,
            mode: u32,
            mode_string: String,
            modified_unix: u64,
            is_dir: bool,
            is_file: bool,
            is_symlink: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            link_target: Option<String>,
            dev: Option<u64>,
            ino: Option<u64>,
            nlink: Option<u64>,
            uid: Option<u32>,
            gid: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            same_file: Option<bool>,
        }

        let info = view.info;
        let modified_unix = info
            .modified
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());

        let data = InfoOutput {
            path: view.path.display().to_string(),
            name: info.name.clone(),
            size: info.size,
            mode: info.mode,
            mode_string: info.mode_string(),
            modified_unix,
            is_dir: info.is_dir,
            is_file: info.is_file,
            is_symlink: info.is_symlink,
            link_target: view.link_target.as_ref().map(|t| t.display().to_string()),
            dev: info.dev,
            ino: info.ino,
            nlink: info.nlink,
            uid: info.uid,
            gid: info.gid,
            same_file: view.same_as.map(|(_, same)| same),
        };

        Self::output(&JsonOutput::success("info", data))
    }

    fn format_copy_result(&self, src: &Path, dst: &Path, outcome: CopyOutcome) -> Result<()> {
        #[derive(Serialize)]
        struct CopyOutput {
            source: String,
            target: String,
            outcome: &'static str,
            bytes_copied: u64,
        }

        let (outcome, bytes_copied) = match outcome {
            CopyOutcome::AlreadySame => ("already_same", 0),
            CopyOutcome::HardLinked => ("hard_linked", 0),
            CopyOutcome::Copied { bytes } => ("copied", bytes),
        };

        let data = CopyOutput {
            source: src.display().to_string(),
            target: dst.display().to_string(),
            outcome,
            bytes_copied,
        };
        Self::output(&JsonOutput::success("cp", data))
    }

    fn format_position(&self, path: &Path, position: u64) -> Result<()> {
        #[derive(Serialize)]
        struct SeekOutput {
            path: String,
            position: u64,
        }

        let data = SeekOutput {
            path: path.display().to_string(),
            position,
        };
        Self::output(&JsonOutput::success("seek", data))
    }

    fn format_content(&self, path: &Path, content: &[u8]) -> Result<()> {
        #[derive(Serialize)]
        struct ReadOutput {
            path: String,
            length: usize,
            encoding: &'static str,
            content: String,
        }

        let (encoding, content_text) = encode_content(content);
        let data = ReadOutput {
            path: path.display().to_string(),
            length: content.len(),
            encoding,
            content: content_text,
        };
        Self::output(&JsonOutput::success("read", data))
    }

    fn format_archive_result(&self, output: &Path, report: &ArchiveReport) -> Result<()> {
        #[derive(Serialize)]
        struct ArchiveOutput {
            output_path: String,
            files_added: usize,
            bytes_written: u64,
            archive_size: u64,
            compression_ratio: f64,
            duration_ms: u128,
        }

        let data = ArchiveOutput {
            output_path: output.display().to_string(),
            files_added: report.files_added,
            bytes_written: report.bytes_written,
            archive_size: report.archive_size,
            compression_ratio: report.compression_ratio(),
            duration_ms: report.duration.as_millis(),
        };
        Self::output(&JsonOutput::success("zip", data))
    }

    fn format_extraction_result(&self, target: &Path, report: &ExtractionReport) -> Result<()> {
        #[derive(Serialize)]
        struct ExtractionOutput {
            target_dir: String,
            files_extracted: usize,
            directories_created: usize,
            bytes_written: u64,
            duration_ms: u128,
        }

        let data = ExtractionOutput {
            target_dir: target.display().to_string(),
            files_extracted: report.files_extracted,
            directories_created: report.directories_created,
            bytes_written: report.bytes_written,
            duration_ms: report.duration.as_millis(),
        };
        Self::output(&JsonOutput::success("unzip", data))
    }

    fn format_archive_listing(
        &self,
        entries: &[ArchiveEntry],
        _long: bool,
        _human_readable: bool,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct ListingOutput<'a> {
            total_entries: usize,
            total_size: u64,
            entries: Vec<EntryOutput<'a>>,
        }

        let data = ListingOutput {
            total_entries: entries.len(),
            total_size: entries.iter().map(|e| e.size).sum(),
            entries: entries
                .iter()
                .map(|e| EntryOutput {
                    name: &e.name,
                    size: e.size,
                    compressed_size: e.compressed_size,
                    is_dir: e.is_dir,
                    mode: e.mode,
                })
                .collect(),
        };
        Self::output(&JsonOutput::success("ls-zip", data))
    }

    fn format_compression_result(
        &self,
        operation: &str,
        dst: &Path,
        report: &CompressionReport,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct CompressionOutput {
            output_path: String,
            bytes_in: u64,
            bytes_out: u64,
            savings_percentage: f64,
            duration_ms: u128,
        }

        let data = CompressionOutput {
            output_path: dst.display().to_string(),
            bytes_in: report.bytes_in,
            bytes_out: report.bytes_out,
            savings_percentage: report.savings_percentage(),
            duration_ms: report.duration.as_millis(),
        };
        Self::output(&JsonOutput::success(operation, data))
    }

    fn format_checksums(&self, path: &Path, sums: &Checksums) -> Result<()> {
        #[derive(Serialize)]
        struct ChecksumOutput<'a> {
            path: String,
            md5: &'a str,
            sha1: &'a str,
            sha256: &'a str,
            sha512: &'a str,
        }

        let data = ChecksumOutput {
            path: path.display().to_string(),
            md5: &sums.md5,
            sha1: &sums.sha1,
            sha256: &sums.sha256,
            sha512: &sums.sha512,
        };
        Self::output(&JsonOutput::success("checksum", data))
    }

    fn format_md5(&self, path: &Path, md5: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Md5Output<'a> {
            path: String,
            md5: &'a str,
        }

        let data = Md5Output {
            path: path.display().to_string(),
            md5,
        };
        Self::output(&JsonOutput::success("checksum", data))
    }

    fn format_download_result(
        &self,
        url: &str,
        path: &Path,
        report: &DownloadReport,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct DownloadOutput<'a> {
            url: &'a str,
            output_path: String,
            status: u16,
            bytes_written: u64,
            #[serde(skip_serializing_if = "Option::is_none")]
            content_length: Option<u64>,
            duration_ms: u128,
        }

        let data = DownloadOutput {
            url,
            output_path: path.display().to_string(),
            status: report.status,
            bytes_written: report.bytes_written,
            content_length: report.content_length,
            duration_ms: report.duration.as_millis(),
        };
        Self::output(&JsonOutput::success("download", data))
    }
}

/// Text stays readable; anything that is not UTF-8 is sent as base64.
fn encode_content(content: &[u8]) -> (&'static str, String) {
    match std::str::from_utf8(content) {
        Ok(text) => ("utf-8", text.to_string()),
        Err(_) => ("base64", STANDARD.encode(content)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let output = JsonOutput::success(
            "touch",
            MessageData {
                message: "created".to_string(),
            },
        );
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["operation"], "touch");
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["message"], "created");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let output = JsonOutput::<()>::error("error", "boom");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "boom");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_entry_output_skips_missing_mode() {
        let entry = EntryOutput {
            name: "a.txt",
            size: 3,
            compressed_size: 3,
            is_dir: false,
            mode: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["name"], "a.txt");
        assert!(json.get("mode").is_none());
    }

    #[test]
    fn test_encode_content_text_and_binary() {
        assert_eq!(encode_content(b"hello"), ("utf-8", "hello".to_string()));
        assert_eq!(
            encode_content(&[0xff, 0x00, 0xfe]),
            ("base64", "/wD+".to_string())
        );
    }
}
