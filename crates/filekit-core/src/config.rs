//! Configuration for archive, compression, and download operations.

use std::time::Duration;

/// Storage method for zip entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveMethod {
    /// Entries are stored uncompressed.
    Stored,
    /// Entries are deflate-compressed.
    #[default]
    Deflated,
}

/// Configuration for zip archive creation.
///
/// # Examples
///
/// ```
/// use filekit_core::ArchiveConfig;
/// use filekit_core::config::ArchiveMethod;
///
/// let config = ArchiveConfig::default()
///     .with_method(ArchiveMethod::Deflated)
///     .with_compression_level(Some(9));
/// assert_eq!(config.compression_level, Some(9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveConfig {
    /// How entry data is stored.
    pub method: ArchiveMethod,

    /// Deflate level (0-9); `None` uses the codec default.
    pub compression_level: Option<i64>,
}

impl ArchiveConfig {
    /// Sets the storage method.
    #[must_use]
    pub fn with_method(mut self, method: ArchiveMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the deflate level, clamped to 0-9.
    #[must_use]
    pub fn with_compression_level(mut self, level: Option<i64>) -> Self {
        self.compression_level = level.map(|l| l.clamp(0, 9));
        self
    }
}

/// Configuration for zip archive extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Apply the mode bits stored in each entry (unix only).
    pub preserve_permissions: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            preserve_permissions: true,
        }
    }
}

impl ExtractConfig {
    /// Sets whether stored mode bits are applied.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }
}

/// Configuration for gzip compression.
#[derive(Debug, Clone)]
pub struct CompressionConfig {
    /// Gzip level (0 = store, 9 = best).
    pub level: u32,
}

impl Default for CompressionConfig {
    /// Level 6, the gzip default.
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl CompressionConfig {
    /// Sets the gzip level, clamped to 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use filekit_core::CompressionConfig;
    ///
    /// assert_eq!(CompressionConfig::default().with_level(12).level, 9);
    /// ```
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self
    }
}

/// Configuration for HTTP downloads.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Whole-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("filekit/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DownloadConfig {
    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
