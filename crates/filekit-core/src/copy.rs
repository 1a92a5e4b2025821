//! File copy with hard-link fast path.
//!
//! [`copy`] first tries to make the destination a hard link to the source,
//! which completes without moving any data. When linking is not possible
//! (different volume, existing destination, unsupported file system) it
//! falls back to streaming the content through a reusable stack buffer and
//! syncing the destination to disk.

use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::io::{self};
use std::path::Path;

use tracing::debug;
use tracing::warn;

use crate::FileError;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::error::at;
use crate::error::require_path;
use crate::info::identical;

/// Buffer size for streaming copies (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Stack-allocated buffer for streaming copies.
///
/// One buffer can be reused across any number of copies.
///
/// # Examples
///
/// ```no_run
/// # use filekit_core::copy::{CopyBuffer, copy_with_buffer};
/// # use filekit_core::NoopProgress;
/// # fn example() -> std::io::Result<()> {
/// let mut buffer = CopyBuffer::new();
/// let mut input = std::fs::File::open("input.txt")?;
/// let mut output = std::fs::File::create("output.txt")?;
///
/// let bytes_copied = copy_with_buffer(&mut input, &mut output, &mut buffer, &mut NoopProgress)?;
/// println!("Copied {} bytes", bytes_copied);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    #[allow(clippy::large_stack_arrays)]
    buf: [u8; COPY_BUFFER_SIZE],
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[inline]
    #[must_use]
    #[allow(clippy::large_stack_arrays)]
    pub fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        COPY_BUFFER_SIZE
    }

    /// Exposes the buffer for callers that drive their own read loop.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a successful [`copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source and destination were already the same file; nothing was done.
    AlreadySame,
    /// Destination was created as a hard link to the source.
    HardLinked,
    /// Content was streamed into the destination.
    Copied {
        /// Number of bytes written.
        bytes: u64,
    },
}

/// Copies data from reader to writer using the provided reusable buffer.
///
/// Interrupted reads are retried. Each written chunk is reported to
/// `progress`.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the byte count
/// would overflow `u64`.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        progress.on_bytes_written(bytes_read as u64);

        total = total
            .checked_add(bytes_read as u64)
            .ok_or_else(|| io::Error::other("byte count overflow"))?;
    }

    Ok(total)
}

/// Copies `src` to `dst`, hard-linking when possible.
///
/// 1. `src` must be a regular file.
/// 2. An existing `dst` must be a regular file; if it is already the same
///    file as `src` the call is a no-op.
/// 3. A hard link from `src` to `dst` is attempted.
/// 4. If linking fails, the content is streamed into a created/truncated
///    `dst`, which is then synced to disk.
///
/// # Errors
///
/// - `InvalidInput` if either side exists but is not a regular file
/// - `NotFound` if `src` does not exist
/// - any I/O error from the content copy
///
/// # Examples
///
/// ```no_run
/// use filekit_core::copy::CopyOutcome;
/// use filekit_core::copy;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// match copy("a.txt", "b.txt")? {
///     CopyOutcome::AlreadySame => println!("nothing to do"),
///     CopyOutcome::HardLinked => println!("linked"),
///     CopyOutcome::Copied { bytes } => println!("copied {bytes} bytes"),
/// }
/// # Ok(())
/// # }
/// ```
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<CopyOutcome> {
    copy_with_progress(src, dst, &mut NoopProgress)
}

/// Like [`copy`], reporting streamed bytes to `progress`.
pub fn copy_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    progress: &mut dyn ProgressCallback,
) -> Result<CopyOutcome> {
    let src = require_path(src.as_ref())?;
    let dst = require_path(dst.as_ref())?;

    let src_meta = fs::metadata(src).map_err(at(src))?;
    if !src_meta.is_file() {
        return Err(FileError::invalid_input(src, "source is not a regular file"));
    }

    match fs::metadata(dst) {
        Ok(dst_meta) => {
            if !dst_meta.is_file() {
                return Err(FileError::invalid_input(
                    dst,
                    "destination exists and is not a regular file",
                ));
            }
            if identical(&src_meta, &dst_meta, src, dst) {
                debug!(src = %src.display(), dst = %dst.display(), "copy: already the same file");
                return Ok(CopyOutcome::AlreadySame);
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(FileError::io(dst, e)),
    }

    match fs::hard_link(src, dst) {
        Ok(()) => {
            debug!(src = %src.display(), dst = %dst.display(), "copy: hard linked");
            Ok(CopyOutcome::HardLinked)
        }
        Err(err) => {
            warn!(
                src = %src.display(),
                dst = %dst.display(),
                error = %err,
                "hard link failed, copying contents"
            );
            let bytes = copy_contents_with_progress(src, dst, progress)?;
            Ok(CopyOutcome::Copied { bytes })
        }
    }
}

/// Streams `src` into a created/truncated `dst` and syncs it.
///
/// Always performs a real copy; never links.
pub fn copy_contents<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64> {
    let src = require_path(src.as_ref())?;
    let dst = require_path(dst.as_ref())?;
    copy_contents_with_progress(src, dst, &mut NoopProgress)
}

fn copy_contents_with_progress(
    src: &Path,
    dst: &Path,
    progress: &mut dyn ProgressCallback,
) -> Result<u64> {
    let mut input = File::open(src).map_err(at(src))?;
    let mut output = File::create(dst).map_err(at(dst))?;

    progress.on_entry_start(src, 1, 1);
    let mut buffer = CopyBuffer::new();
    let bytes =
        copy_with_buffer(&mut input, &mut output, &mut buffer, progress).map_err(at(dst))?;
    output.sync_all().map_err(at(dst))?;
    progress.on_entry_complete(src);
    progress.on_complete();

    debug!(src = %src.display(), dst = %dst.display(), bytes, "copy: contents streamed");
    Ok(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_copy_buffer_new() {
        let buffer = CopyBuffer::new();
        assert_eq!(buffer.size(), 64 * 1024);
    }

    #[test]
    fn test_copy_empty_source() {
        let mut buffer = CopyBuffer::new();
        let mut input = Cursor::new(Vec::<u8>::new());
        let mut output = Vec::new();

        let copied =
            copy_with_buffer(&mut input, &mut output, &mut buffer, &mut NoopProgress).unwrap();
        assert_eq!(copied, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_copy_multiple_chunks() {
        let mut buffer = CopyBuffer::new();
        let input_data = vec![0x55u8; COPY_BUFFER_SIZE * 3 + 1000];
        let mut input = Cursor::new(&input_data);
        let mut output = Vec::new();

        let copied =
            copy_with_buffer(&mut input, &mut output, &mut buffer, &mut NoopProgress).unwrap();
        assert_eq!(copied, input_data.len() as u64);
        assert_eq!(output, input_data);
    }

    #[test]
    fn test_copy_reports_progress() {
        #[derive(Default)]
        struct Counter(u64);

        impl ProgressCallback for Counter {
            fn on_entry_start(&mut self, _: &Path, _: usize, _: usize) {}
            fn on_bytes_written(&mut self, bytes: u64) {
                self.0 += bytes;
            }
            fn on_entry_complete(&mut self, _: &Path) {}
            fn on_complete(&mut self) {}
        }

        let mut counter = Counter::default();
        let data = vec![1u8; COPY_BUFFER_SIZE + 7];
        let mut buffer = CopyBuffer::new();
        copy_with_buffer(&mut Cursor::new(&data), &mut Vec::new(), &mut buffer, &mut counter)
            .unwrap();
        assert_eq!(counter.0, data.len() as u64);
    }

    #[test]
    fn test_copy_with_interrupted_reads() {
        use std::io::Error;
        use std::io::ErrorKind;

        struct InterruptedReader {
            data: Vec<u8>,
            position: usize,
            calls: usize,
        }

        impl Read for InterruptedReader {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                self.calls += 1;
                if self.calls % 2 == 1 && self.position < self.data.len() {
                    return Err(Error::new(ErrorKind::Interrupted, "interrupted"));
                }
                let remaining = self.data.len() - self.position;
                let to_read = remaining.min(buf.len()).min(100);
                buf[..to_read].copy_from_slice(&self.data[self.position..self.position + to_read]);
                self.position += to_read;
                Ok(to_read)
            }
        }

        let test_data = vec![0x42u8; 1000];
        let mut reader = InterruptedReader {
            data: test_data.clone(),
            position: 0,
            calls: 0,
        };
        let mut buffer = CopyBuffer::new();
        let mut output = Vec::new();

        copy_with_buffer(&mut reader, &mut output, &mut buffer, &mut NoopProgress).unwrap();
        assert_eq!(output, test_data);
    }

    #[test]
    fn test_copy_with_write_failure() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(io::Error::other("write failed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut input = Cursor::new(vec![0x42u8; 1000]);
        let mut buffer = CopyBuffer::new();
        let err = copy_with_buffer(&mut input, &mut FailingWriter, &mut buffer, &mut NoopProgress)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_copy_file_new_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("b.txt");
        fs::write(&src, b"payload").unwrap();

        let outcome = copy(&src, &dst).unwrap();
        assert!(matches!(
            outcome,
            CopyOutcome::HardLinked | CopyOutcome::Copied { .. }
        ));
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn test_copy_file_onto_itself() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        fs::write(&src, b"keep me").unwrap();

        assert_eq!(copy(&src, &src).unwrap(), CopyOutcome::AlreadySame);
        assert_eq!(fs::read(&src).unwrap(), b"keep me");
    }

    #[test]
    fn test_copy_existing_destination_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("b.txt");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old old old").unwrap();

        let outcome = copy(&src, &dst).unwrap();
        assert_eq!(outcome, CopyOutcome::Copied { bytes: 3 });
        assert_eq!(fs::read(&dst).unwrap(), b"new");
    }

    #[test]
    fn test_copy_directory_source_rejected() {
        let temp = TempDir::new().unwrap();
        let dst = temp.path().join("out");

        let err = copy(temp.path(), &dst).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(!dst.exists());
    }

    #[test]
    fn test_copy_directory_destination_rejected() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("dir");
        fs::write(&src, b"x").unwrap();
        fs::create_dir(&dst).unwrap();

        let err = copy(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(dst.is_dir());
    }

    #[test]
    fn test_copy_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = copy(temp.path().join("none"), temp.path().join("out")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_copy_contents_always_copies() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("b.txt");
        fs::write(&src, b"abc").unwrap();

        assert_eq!(copy_contents(&src, &dst).unwrap(), 3);
        fs::write(&src, b"changed").unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"abc");
    }
}
