//! Basic file operations: create, truncate, move, remove, read, write, seek.
//!
//! Every function opens what it needs and drops it before returning, on
//! success and error paths alike.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::io::{self};
use std::path::Path;

use tracing::debug;

use crate::FileError;
use crate::Result;
use crate::error::at;
use crate::error::require_path;

/// Reference point for [`seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Offset from the start of the file.
    Start,
    /// Offset from the current position (the start, for a fresh handle).
    Current,
    /// Offset from the end of the file.
    End,
}

impl TryFrom<u8> for Whence {
    type Error = FileError;

    /// Maps the conventional `0`, `1`, `2` encoding.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Start),
            1 => Ok(Self::Current),
            2 => Ok(Self::End),
            other => Err(FileError::InvalidArgument {
                reason: format!("whence must be 0, 1 or 2, got {other}"),
            }),
        }
    }
}

/// Creates an empty file, truncating any existing file at `path`.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::create_empty;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// create_empty("test.txt")?;
/// # Ok(())
/// # }
/// ```
pub fn create_empty<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), "create empty file");
    File::create(path).map_err(at(path))?;
    Ok(())
}

/// Sets the length of an existing file, shrinking or zero-extending it.
pub fn truncate<P: AsRef<Path>>(path: P, size: u64) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), size, "truncate");
    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(at(path))?;
    file.set_len(size).map_err(at(path))
}

/// Renames `src` to `dst`.
///
/// Atomic within one file system; moving across volumes fails with an
/// I/O error on most platforms.
pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let src = require_path(src.as_ref())?;
    let dst = require_path(dst.as_ref())?;
    debug!(src = %src.display(), dst = %dst.display(), "rename");
    fs::rename(src, dst).map_err(at(src))
}

/// Removes a file. Directories are rejected by the host.
pub fn remove<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), "remove");
    fs::remove_file(path).map_err(at(path))
}

/// Reports whether `path` exists, following symbolic links.
///
/// # Errors
///
/// Fails only when existence cannot be determined (e.g. permission denied
/// on a parent directory).
pub fn exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = require_path(path.as_ref())?;
    path.try_exists().map_err(at(path))
}

/// Opens `path` read-only and closes it again.
///
/// Fails with `NotFound` or `PermissionDenied` accordingly.
pub fn check_readable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = require_path(path.as_ref())?;
    File::open(path).map_err(at(path))?;
    Ok(())
}

/// Opens `path` write-only (without truncating) and closes it again.
pub fn check_writable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = require_path(path.as_ref())?;
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(at(path))?;
    Ok(())
}

/// Replaces the content of `path` with `content`, creating it if needed.
pub fn write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), bytes = content.len(), "write");
    let mut file = File::create(path).map_err(at(path))?;
    file.write_all(content).map_err(at(path))
}

/// Appends `content` to an existing file.
pub fn append<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), bytes = content.len(), "append");
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(at(path))?;
    file.write_all(content).map_err(at(path))
}

/// Reads up to `len` bytes from the start of `path`.
///
/// The returned vector holds exactly the bytes read; it is shorter than
/// `len` when the file is.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::read;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let head = read("test.txt", 5)?;
/// println!("{}", String::from_utf8_lossy(&head));
/// # Ok(())
/// # }
/// ```
pub fn read<P: AsRef<Path>>(path: P, len: usize) -> Result<Vec<u8>> {
    let path = require_path(path.as_ref())?;
    let file = File::open(path).map_err(at(path))?;
    let mut data = Vec::with_capacity(len.min(64 * 1024));
    file.take(len as u64)
        .read_to_end(&mut data)
        .map_err(at(path))?;
    debug!(path = %path.display(), requested = len, read = data.len(), "read");
    Ok(data)
}

/// Reads the whole content of `path`.
pub fn read_to_end<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = require_path(path.as_ref())?;
    fs::read(path).map_err(at(path))
}

/// Opens `path` read-only, seeks, and returns the new absolute position.
///
/// Seeking beyond the end of the file is allowed and does not change the
/// file.
///
/// # Errors
///
/// `InvalidInput` for a negative offset from [`Whence::Start`] or a target
/// before the start of the file.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::Whence;
/// use filekit_core::seek;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let pos = seek("test.txt", -2, Whence::End)?;
/// println!("position: {pos}");
/// # Ok(())
/// # }
/// ```
pub fn seek<P: AsRef<Path>>(path: P, offset: i64, whence: Whence) -> Result<u64> {
    let path = require_path(path.as_ref())?;
    let from = match whence {
        Whence::Start => {
            let start = u64::try_from(offset).map_err(|_| {
                FileError::invalid_input(path, "negative offset from start of file")
            })?;
            SeekFrom::Start(start)
        }
        Whence::Current => SeekFrom::Current(offset),
        Whence::End => SeekFrom::End(offset),
    };

    let mut file = File::open(path).map_err(at(path))?;
    let pos = file.seek(from).map_err(at(path))?;
    debug!(path = %path.display(), offset, ?whence, pos, "seek");
    Ok(pos)
}

/// Runs `f` with a fresh named temporary file, then removes the file.
///
/// The file is created in the system temp directory with a name starting
/// with `prefix`. Removal errors are reported, not ignored.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::with_temp_file;
/// use std::io::Write;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let len = with_temp_file("scratch", |file, _path| {
///     file.write_all(b"scratch data")?;
///     Ok(12)
/// })?;
/// assert_eq!(len, 12);
/// # Ok(())
/// # }
/// ```
pub fn with_temp_file<T, F>(prefix: &str, f: F) -> Result<T>
where
    F: FnOnce(&mut File, &Path) -> io::Result<T>,
{
    let temp_dir = std::env::temp_dir();
    let mut temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile()
        .map_err(at(&temp_dir))?;
    let path = temp.path().to_path_buf();
    debug!(path = %path.display(), "temp file created");

    let result = f(temp.as_file_mut(), &path).map_err(at(&path));
    let closed = temp.close().map_err(at(&path));
    let value = result?;
    closed?;
    Ok(value)
}
