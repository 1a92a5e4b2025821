//! Single-file gzip compression and decompression.
//!
//! Both directions stream through the shared copy buffer, so memory use is
//! independent of file size.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::debug;
use tracing::warn;

use crate::CompressionConfig;
use crate::CompressionReport;
use crate::FileError;
use crate::NoopProgress;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::error::at;
use crate::error::require_path;

/// Compresses `src` into a single-member gzip file at `gz_dst`.
///
/// `gz_dst` is created or truncated.
///
/// # Examples
///
/// ```no_run
/// use filekit_core::CompressionConfig;
/// use filekit_core::compress_file;
///
/// # fn main() -> Result<(), filekit_core::FileError> {
/// let report = compress_file("test.txt", "test.txt.gz", &CompressionConfig::default())?;
/// println!("{} -> {} bytes", report.bytes_in, report.bytes_out);
/// # Ok(())
/// # }
/// ```
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    gz_dst: Q,
    config: &CompressionConfig,
) -> Result<CompressionReport> {
    let src = require_path(src.as_ref())?;
    let gz_dst = require_path(gz_dst.as_ref())?;
    let start = Instant::now();

    let mut input = File::open(src).map_err(at(src))?;
    let output = File::create(gz_dst).map_err(at(gz_dst))?;
    let mut encoder = GzEncoder::new(output, Compression::new(config.level.min(9)));

    let mut buffer = CopyBuffer::new();
    let bytes_in = copy_with_buffer(&mut input, &mut encoder, &mut buffer, &mut NoopProgress)
        .map_err(at(gz_dst))?;
    let mut output = encoder.finish().map_err(at(gz_dst))?;
    output.flush().map_err(at(gz_dst))?;
    let bytes_out = output.metadata().map_err(at(gz_dst))?.len();

    debug!(src = %src.display(), dst = %gz_dst.display(), bytes_in, bytes_out, "gzip compressed");
    Ok(CompressionReport {
        bytes_in,
        bytes_out,
        duration: start.elapsed(),
    })
}

/// Decompresses the gzip file `gz_src` into `dst`.
///
/// Only the first gzip member is decoded. The header is checked before `dst`
/// is created, and a stream that fails midway removes `dst` again.
///
/// # Errors
///
/// `InvalidFormat` if `gz_src` is not valid gzip data.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(
    gz_src: P,
    dst: Q,
) -> Result<CompressionReport> {
    let gz_src = require_path(gz_src.as_ref())?;
    let dst = require_path(dst.as_ref())?;
    let start = Instant::now();

    let input = File::open(gz_src).map_err(at(gz_src))?;
    let bytes_in = input.metadata().map_err(at(gz_src))?.len();
    let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(input)));
    decoder
        .fill_buf()
        .map_err(|e| decode_error(gz_src, dst, e))?;

    let mut output = File::create(dst).map_err(at(dst))?;
    let mut buffer = CopyBuffer::new();
    let copied = copy_with_buffer(&mut decoder, &mut output, &mut buffer, &mut NoopProgress);
    drop(output);
    let bytes_out = match copied {
        Ok(n) => n,
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(dst) {
                warn!(dst = %dst.display(), error = %cleanup, "failed to remove partial output");
            }
            return Err(decode_error(gz_src, dst, e));
        }
    };

    debug!(src = %gz_src.display(), dst = %dst.display(), bytes_in, bytes_out, "gzip decompressed");
    Ok(CompressionReport {
        bytes_in,
        bytes_out,
        duration: start.elapsed(),
    })
}

/// Decoder failures blame the source; anything else is an I/O error on `dst`.
fn decode_error(gz_src: &Path, dst: &Path, err: io::Error) -> FileError {
    match err.kind() {
        ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof => {
            FileError::InvalidFormat {
                path: gz_src.to_path_buf(),
                reason: err.to_string(),
            }
        }
        _ => FileError::io(dst, err),
    }
}
