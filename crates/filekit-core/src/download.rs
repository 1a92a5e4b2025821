//! HTTP GET into a local file.

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use reqwest::blocking::Client;
use tracing::debug;

use crate::DownloadConfig;
use crate::DownloadReport;
use crate::FileError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::error::at;
use crate::error::require_path;

/// Downloads `url` into a newly created file at `path`.
///
/// The destination is created only once the server answers with a success
/// status. There is no retry, and a body that fails midway leaves the
/// partial file in place.
///
/// # Errors
///
/// - `Download` for transport failures or non-success statuses
/// - I/O errors from creating or writing `path`, carrying that path
///
/// # Examples
///
/// ```no_run
/// use filekit_core::DownloadConfig;
/// use filekit_core::download;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let report = download("page.html", "http://example.com/", &DownloadConfig::default())?;
/// println!("{} bytes", report.bytes_written);
/// # Ok(())
/// # }
/// ```
pub fn download<P: AsRef<Path>>(
    path: P,
    url: &str,
    config: &DownloadConfig,
) -> Result<DownloadReport> {
    download_with_progress(path, url, config, &mut NoopProgress)
}

/// Like [`download`], reporting body bytes to `progress`.
pub fn download_with_progress<P: AsRef<Path>>(
    path: P,
    url: &str,
    config: &DownloadConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<DownloadReport> {
    let path = require_path(path.as_ref())?;
    let transport = |err: reqwest::Error| FileError::Download {
        url: url.to_string(),
        reason: err.to_string(),
    };
    let start = Instant::now();

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(transport)?;

    debug!(url, path = %path.display(), "download started");
    let mut response = client.get(url).send().map_err(transport)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FileError::Download {
            url: url.to_string(),
            reason: format!("server responded with {status}"),
        });
    }
    let content_length = response.content_length();

    let mut output = File::create(path).map_err(at(path))?;
    progress.on_entry_start(path, 1, 1);
    let mut body = BodyReader::new(&mut response);
    let mut buffer = CopyBuffer::new();
    let bytes_written = copy_with_buffer(&mut body, &mut output, &mut buffer, progress)
        .map_err(|e| {
            if body.failed {
                FileError::Download {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            } else {
                FileError::io(path, e)
            }
        })?;
    progress.on_entry_complete(path);
    progress.on_complete();

    debug!(url, path = %path.display(), bytes_written, "download finished");
    Ok(DownloadReport {
        bytes_written,
        content_length,
        status: status.as_u16(),
        duration: start.elapsed(),
    })
}

/// Remembers whether a copy failed on the network side or the disk side.
struct BodyReader<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> BodyReader<R> {
    const fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }
}

impl<R: Read> Read for BodyReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = self.inner.read(buf);
        if let Err(e) = &result
            && e.kind() != io::ErrorKind::Interrupted
        {
            self.failed = true;
        }
        result
    }
}
