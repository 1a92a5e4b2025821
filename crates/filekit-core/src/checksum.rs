//! Content digests.
//!
//! All functions stream the input through the copy buffer; no file is ever
//! loaded into memory whole. [`checksum_file`] feeds every chunk to all four
//! hashers in one pass, so its MD5 always agrees with [`md5_file`].

use std::fs::File;
use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;

use md5::Md5;
use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;
use sha2::Sha512;
use tracing::debug;

use crate::Result;
use crate::copy::CopyBuffer;
use crate::error::at;
use crate::error::require_path;

/// Hex-encoded digests of one content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksums {
    /// MD5, 32 hex digits.
    pub md5: String,
    /// SHA-1, 40 hex digits.
    pub sha1: String,
    /// SHA-256, 64 hex digits.
    pub sha256: String,
    /// SHA-512, 128 hex digits.
    pub sha512: String,
}

#[derive(Default)]
struct Hashers {
    md5: Md5,
    sha1: Sha1,
    sha256: Sha256,
    sha512: Sha512,
}

impl Hashers {
    fn update(&mut self, chunk: &[u8]) {
        self.md5.update(chunk);
        self.sha1.update(chunk);
        self.sha256.update(chunk);
        self.sha512.update(chunk);
    }

    fn finish(self) -> Checksums {
        Checksums {
            md5: format!("{:x}", self.md5.finalize()),
            sha1: format!("{:x}", self.sha1.finalize()),
            sha256: format!("{:x}", self.sha256.finalize()),
            sha512: format!("{:x}", self.sha512.finalize()),
        }
    }
}

/// Feeds every chunk of `reader` to `sink`.
fn stream_chunks<R: Read>(reader: &mut R, mut sink: impl FnMut(&[u8])) -> std::io::Result<u64> {
    let mut buffer = CopyBuffer::new();
    let buf = buffer.as_mut_slice();
    let mut total = 0u64;
    loop {
        match reader.read(buf) {
            Ok(0) => return Ok(total),
            Ok(n) => {
                sink(&buf[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Computes MD5, SHA-1, SHA-256 and SHA-512 of `path` in one pass.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::checksum_file;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let sums = checksum_file("test.txt")?;
/// println!("Md5: {}", sums.md5);
/// println!("Sha256: {}", sums.sha256);
/// # Ok(())
/// # }
/// ```
pub fn checksum_file<P: AsRef<Path>>(path: P) -> Result<Checksums> {
    let path = require_path(path.as_ref())?;
    let mut file = File::open(path).map_err(at(path))?;
    let mut hashers = Hashers::default();
    let bytes = stream_chunks(&mut file, |chunk| hashers.update(chunk)).map_err(at(path))?;
    debug!(path = %path.display(), bytes, "checksums computed");
    Ok(hashers.finish())
}

/// Computes all four digests of an in-memory buffer.
///
/// # Examples
///
/// ```
/// use filekit_core::checksum_bytes;
///
/// let sums = checksum_bytes(b"hello\n");
/// assert_eq!(sums.md5, "b1946ac92492d2347c6235b4d2611184");
/// ```
#[must_use]
pub fn checksum_bytes(data: &[u8]) -> Checksums {
    let mut hashers = Hashers::default();
    hashers.update(data);
    hashers.finish()
}

/// Computes only the MD5 digest of `path`, streaming.
pub fn md5_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = require_path(path.as_ref())?;
    let mut file = File::open(path).map_err(at(path))?;
    let mut hasher = Md5::new();
    stream_chunks(&mut file, |chunk| hasher.update(chunk)).map_err(at(path))?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ErrorKind as FileErrorKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_known_digests_hello() {
        let sums = checksum_bytes(b"hello\n");
        assert_eq!(sums.md5, "b1946ac92492d2347c6235b4d2611184");
        assert_eq!(sums.sha1, "f572d396fae9206628714fb2ce00f72e94f2258f");
        assert_eq!(
            sums.sha256,
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
        assert_eq!(sums.sha512.len(), 128);
    }

    #[test]
    fn test_known_digests_empty() {
        let sums = checksum_bytes(b"");
        assert_eq!(sums.md5, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            sums.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_file_matches_bytes_across_chunks() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.bin");
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &data).unwrap();

        let from_file = checksum_file(&path).unwrap();
        assert_eq!(from_file, checksum_bytes(&data));
        assert_eq!(md5_file(&path).unwrap(), from_file.md5);
    }

    #[test]
    fn test_checksum_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = checksum_file(temp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), FileErrorKind::NotFound);
    }
}
