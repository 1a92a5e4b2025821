//! Hard and symbolic links.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::Result;
use crate::error::at;
use crate::error::require_path;

/// Creates `link` as a hard link to `original`.
///
/// # Errors
///
/// `InvalidInput` if either path is empty, `AlreadyExists` if `link`
/// exists, or an I/O error (e.g. across devices).
pub fn hard_link<P: AsRef<Path>, Q: AsRef<Path>>(original: P, link: Q) -> Result<()> {
    let original = require_path(original.as_ref())?;
    let link = require_path(link.as_ref())?;
    debug!(original = %original.display(), link = %link.display(), "hard link");
    fs::hard_link(original, link).map_err(at(link))
}

/// Creates `link` as a symbolic link pointing at `original`.
///
/// `original` is stored verbatim and need not exist.
pub fn symlink<P: AsRef<Path>, Q: AsRef<Path>>(original: P, link: Q) -> Result<()> {
    let original = require_path(original.as_ref())?;
    let link = require_path(link.as_ref())?;
    debug!(original = %original.display(), link = %link.display(), "symlink");
    platform_symlink(original, link).map_err(at(link))
}

#[cfg(unix)]
fn platform_symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn platform_symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}

#[cfg(not(any(unix, windows)))]
fn platform_symlink(_original: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

/// Returns the target stored in the symbolic link `link`.
pub fn read_link<P: AsRef<Path>>(link: P) -> Result<PathBuf> {
    let link = require_path(link.as_ref())?;
    fs::read_link(link).map_err(at(link))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_hard_link_shares_content() {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("a");
        let link = temp.path().join("b");
        fs::write(&original, b"one").unwrap();

        hard_link(&original, &link).unwrap();
        fs::write(&original, b"two").unwrap();
        assert_eq!(fs::read(&link).unwrap(), b"two");
    }

    #[test]
    fn test_hard_link_existing_target() {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("a");
        let link = temp.path().join("b");
        fs::write(&original, b"x").unwrap();
        fs::write(&link, b"y").unwrap();

        let err = hard_link(&original, &link).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_hard_link_empty_path() {
        assert_eq!(
            hard_link("", "b").unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            hard_link("a", "").unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_roundtrip() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("link");

        symlink("target.txt", &link).unwrap();
        assert_eq!(read_link(&link).unwrap(), PathBuf::from("target.txt"));
    }
}
