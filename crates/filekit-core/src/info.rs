//! File metadata queries.

use std::fs;
use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use crate::Result;
use crate::error::at;
use crate::error::require_path;

/// Snapshot of a path's metadata.
///
/// Unix-only fields are `None` on other platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Final path component, or the whole path if it has none.
    pub name: String,

    /// Size in bytes.
    pub size: u64,

    /// Permission bits (`0o7777` mask). Synthesized from the read-only flag
    /// on non-unix hosts.
    pub mode: u32,

    /// Last modification time.
    pub modified: SystemTime,

    /// Whether the path is a directory.
    pub is_dir: bool,

    /// Whether the path is a regular file.
    pub is_file: bool,

    /// Whether the path itself is a symbolic link (only for [`lstat`]).
    pub is_symlink: bool,

    /// Device id.
    pub dev: Option<u64>,

    /// Inode number.
    pub ino: Option<u64>,

    /// Number of hard links.
    pub nlink: Option<u64>,

    /// Owner user id.
    pub uid: Option<u32>,

    /// Owner group id.
    pub gid: Option<u32>,
}

impl FileInfo {
    fn from_metadata(path: &Path, meta: &Metadata) -> Result<Self> {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        let modified = meta.modified().map_err(at(path))?;
        let (dev, ino, nlink, uid, gid) = unix_ids(meta);

        Ok(Self {
            name,
            size: meta.len(),
            mode: mode_bits(meta),
            modified,
            is_dir: meta.is_dir(),
            is_file: meta.is_file(),
            is_symlink: meta.file_type().is_symlink(),
            dev,
            ino,
            nlink,
            uid,
            gid,
        })
    }

    /// Formats `mode` like `ls -l` does for the permission part.
    ///
    /// # Examples
    ///
    /// ```
    /// # use filekit_core::FileInfo;
    /// # fn demo(info: &FileInfo) {
    /// // 0o754 renders as "rwxr-xr--"
    /// println!("{}", info.mode_string());
    /// # }
    /// ```
    #[must_use]
    pub fn mode_string(&self) -> String {
        const FLAGS: [(u32, char); 9] = [
            (0o400, 'r'),
            (0o200, 'w'),
            (0o100, 'x'),
            (0o040, 'r'),
            (0o020, 'w'),
            (0o010, 'x'),
            (0o004, 'r'),
            (0o002, 'w'),
            (0o001, 'x'),
        ];
        let kind = if self.is_dir {
            'd'
        } else if self.is_symlink {
            'l'
        } else {
            '-'
        };
        std::iter::once(kind)
            .chain(
                FLAGS
                    .iter()
                    .map(|&(bit, c)| if self.mode & bit == 0 { '-' } else { c }),
            )
            .collect()
    }
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

#[cfg(unix)]
#[allow(clippy::type_complexity)]
fn unix_ids(meta: &Metadata) -> (Option<u64>, Option<u64>, Option<u64>, Option<u32>, Option<u32>) {
    use std::os::unix::fs::MetadataExt;
    (
        Some(meta.dev()),
        Some(meta.ino()),
        Some(meta.nlink()),
        Some(meta.uid()),
        Some(meta.gid()),
    )
}

#[cfg(not(unix))]
#[allow(clippy::type_complexity)]
fn unix_ids(_meta: &Metadata) -> (Option<u64>, Option<u64>, Option<u64>, Option<u32>, Option<u32>) {
    (None, None, None, None, None)
}

/// Retrieves metadata for `path`, following symbolic links.
///
/// # Errors
///
/// Returns `NotFound` if the path does not exist.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::stat;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let info = stat("Cargo.toml")?;
/// println!("{} is {} bytes", info.name, info.size);
/// # Ok(())
/// # }
/// ```
pub fn stat<P: AsRef<Path>>(path: P) -> Result<FileInfo> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), "stat");
    let meta = fs::metadata(path).map_err(at(path))?;
    FileInfo::from_metadata(path, &meta)
}

/// Retrieves metadata for `path` without following a final symbolic link.
pub fn lstat<P: AsRef<Path>>(path: P) -> Result<FileInfo> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), "lstat");
    let meta = fs::symlink_metadata(path).map_err(at(path))?;
    FileInfo::from_metadata(path, &meta)
}

/// Reports whether `a` and `b` name the same underlying file.
///
/// # Errors
///
/// Returns an error if either path cannot be stat'ed.
pub fn same_file<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> Result<bool> {
    let a = require_path(a.as_ref())?;
    let b = require_path(b.as_ref())?;
    let a_meta = fs::metadata(a).map_err(at(a))?;
    let b_meta = fs::metadata(b).map_err(at(b))?;
    Ok(identical(&a_meta, &b_meta, a, b))
}

/// Identity check on already-fetched metadata.
#[cfg(unix)]
pub(crate) fn identical(a_meta: &Metadata, b_meta: &Metadata, _a: &Path, _b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    a_meta.dev() == b_meta.dev() && a_meta.ino() == b_meta.ino()
}

/// Identity check on already-fetched metadata.
#[cfg(not(unix))]
pub(crate) fn identical(_a_meta: &Metadata, _b_meta: &Metadata, a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
