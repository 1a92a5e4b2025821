//! Permission, ownership, and timestamp changes.
//!
//! Semantics are whatever the host defines. Ownership changes are no-ops on
//! platforms without POSIX ownership; permission changes there only toggle
//! the read-only flag.

use std::fs;
use std::fs::FileTimes;
use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

use crate::Result;
use crate::error::at;
use crate::error::require_path;

/// Sets the permission bits of `path`.
///
/// On non-unix hosts the file becomes read-only when `mode` grants no
/// write bit.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::set_permissions;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// set_permissions("script.sh", 0o755)?;
/// # Ok(())
/// # }
/// ```
pub fn set_permissions<P: AsRef<Path>>(path: P, mode: u32) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), mode = format_args!("{mode:#o}"), "set permissions");
    fs::set_permissions(path, permissions_from_mode(path, mode)?).map_err(at(path))
}

#[cfg(unix)]
fn permissions_from_mode(_path: &Path, mode: u32) -> Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(mode & 0o7777))
}

#[cfg(not(unix))]
fn permissions_from_mode(path: &Path, mode: u32) -> Result<fs::Permissions> {
    let mut perms = fs::metadata(path).map_err(at(path))?.permissions();
    perms.set_readonly(mode & 0o222 == 0);
    Ok(perms)
}

/// Changes the owner and/or group of `path`.
///
/// `None` leaves the corresponding id unchanged. Symbolic links are
/// followed.
///
/// # Errors
///
/// Usually `PermissionDenied` unless running with enough privilege.
#[cfg(unix)]
pub fn set_owner<P: AsRef<Path>>(path: P, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), ?uid, ?gid, "set owner");
    std::os::unix::fs::chown(path, uid, gid).map_err(at(path))
}

/// Changes the owner and/or group of `path`.
///
/// No-op on this platform beyond checking that `path` exists.
#[cfg(not(unix))]
pub fn set_owner<P: AsRef<Path>>(path: P, uid: Option<u32>, gid: Option<u32>) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), ?uid, ?gid, "set owner unsupported, ignoring");
    fs::metadata(path).map_err(at(path))?;
    Ok(())
}

/// Sets the access and modification times of `path`.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::set_times;
/// use std::time::{Duration, SystemTime};
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let then = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
/// set_times("test.txt", then, then)?;
/// # Ok(())
/// # }
/// ```
pub fn set_times<P: AsRef<Path>>(path: P, accessed: SystemTime, modified: SystemTime) -> Result<()> {
    let path = require_path(path.as_ref())?;
    debug!(path = %path.display(), "set times");
    // Windows needs a writable handle to change attributes; unix only needs
    // ownership.
    let file = OpenOptions::new()
        .read(true)
        .write(cfg!(windows))
        .open(path)
        .map_err(at(path))?;
    let times = FileTimes::new()
        .set_accessed(accessed)
        .set_modified(modified);
    file.set_times(times).map_err(at(path))
}
