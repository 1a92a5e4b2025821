//! Operation reports and progress callbacks.

use std::path::Path;
use std::time::Duration;

/// Report of a zip archive creation.
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Number of files written as entries.
    pub files_added: usize,

    /// Total uncompressed bytes written into the archive.
    pub bytes_written: u64,

    /// Size of the finished archive file.
    pub archive_size: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl ArchiveReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either side is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit_core::ArchiveReport;
    ///
    /// let mut report = ArchiveReport::new();
    /// report.bytes_written = 1000;
    /// report.archive_size = 500;
    /// assert_eq!(report.compression_ratio(), 2.0);
    ///
    /// report.archive_size = 0;
    /// assert_eq!(report.compression_ratio(), 0.0);
    /// ```
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.archive_size == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.archive_size as f64
    }
}

/// Report of a zip archive extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of files extracted.
    pub files_extracted: usize,

    /// Number of directories created from directory entries.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of items materialized.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Report of a gzip compress or decompress pass.
#[derive(Debug, Clone, Default)]
pub struct CompressionReport {
    /// Bytes read from the input file.
    pub bytes_in: u64,

    /// Bytes written to the output file.
    pub bytes_out: u64,

    /// Duration of the operation.
    pub duration: Duration,
}

impl CompressionReport {
    /// Returns space saved as a percentage of the larger side.
    ///
    /// Returns 0.0 when nothing was read or written.
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit_core::CompressionReport;
    ///
    /// let report = CompressionReport {
    ///     bytes_in: 1000,
    ///     bytes_out: 250,
    ///     ..Default::default()
    /// };
    /// assert_eq!(report.savings_percentage(), 75.0);
    /// ```
    #[must_use]
    pub fn savings_percentage(&self) -> f64 {
        let larger = self.bytes_in.max(self.bytes_out);
        if larger == 0 {
            return 0.0;
        }
        let smaller = self.bytes_in.min(self.bytes_out);
        ((larger - smaller) as f64 / larger as f64) * 100.0
    }
}

/// Report of an HTTP download.
#[derive(Debug, Clone, Default)]
pub struct DownloadReport {
    /// Bytes written to the destination file.
    pub bytes_written: u64,

    /// `Content-Length` announced by the server, if any.
    pub content_length: Option<u64>,

    /// HTTP status code of the response.
    pub status: u16,

    /// Duration of the operation.
    pub duration: Duration,
}

/// Callback trait for progress reporting during long-running operations.
///
/// Implement this trait to receive progress updates while copying,
/// archiving, extracting, or downloading.
///
/// # Examples
///
/// ```
/// use filekit_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{}/{}] {}", current, total, path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called when starting to process an entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the entry being processed
    /// * `total` - Total number of entries
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of bytes written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called when the entire operation is complete.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
